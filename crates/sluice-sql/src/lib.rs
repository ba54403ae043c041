mod compilation;
pub use compilation::Compilation;

pub mod compiler;
pub use compiler::Compiler;

pub mod metadata;

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
