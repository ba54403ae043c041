fn main() -> anyhow::Result<()> {
    sluice_cli::SluiceCli::new().parse_and_run()
}
