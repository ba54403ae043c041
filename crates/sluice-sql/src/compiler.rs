mod index;
use index::StreamIndex;

mod select;

mod verify;

use crate::{Compilation, Serializer, Statement};

use sluice_core::{
    ensure_valid, err,
    graph::{Group, Node, NodeRole, Stream},
    Result,
};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Compiles stream graphs into SQL statement batches.
///
/// A compiler walks every relation of a stream in declared order and compiles
/// each node the relation outputs, compiling the node's inputs first. Every
/// node is compiled at most once, so a table is always created before any
/// statement reads from it.
///
/// All state lives in the compiler value, which is created fresh for every
/// call. Any failure aborts the whole compile.
#[derive(Debug, Default)]
pub struct Compiler {
    /// Nodes already compiled
    visited: HashSet<String>,

    /// Nodes whose inputs are being compiled
    in_progress: HashSet<String>,

    serializer: Serializer,

    compilation: Compilation,
}

impl Compiler {
    /// Compiles one stream.
    pub fn compile_stream(stream: &Stream) -> Result<Compilation> {
        let mut compiler = Compiler::default();
        compiler.stream(stream)?;
        Ok(compiler.compilation)
    }

    /// Compiles every stream of the group, in order, into one batch.
    ///
    /// Streams share the compiler, so a node id compiled by an earlier stream
    /// is not compiled again.
    pub fn compile_group(group: &Group) -> Result<Compilation> {
        ensure_valid!(!group.group_id.trim().is_empty(), "group id is empty");
        ensure_valid!(
            !group.streams.is_empty(),
            "group {} has no streams",
            group.group_id
        );

        info!(group_id = %group.group_id, streams = group.streams.len(), "compiling group");

        let mut compiler = Compiler::default();

        for stream in &group.streams {
            compiler.stream(stream)?;
        }

        info!(
            group_id = %group.group_id,
            statements = compiler.compilation.len(),
            "compiled group"
        );

        Ok(compiler.compilation)
    }

    fn stream(&mut self, stream: &Stream) -> Result<()> {
        info!(stream_id = %stream.stream_id, "compiling stream");

        self.stream_impl(stream)
            .map_err(|e| e.context(err!("compile stream {}", stream.stream_id)))?;

        info!(stream_id = %stream.stream_id, "compiled stream");
        Ok(())
    }

    fn stream_impl(&mut self, stream: &Stream) -> Result<()> {
        let index = StreamIndex::new(stream)?;

        for relation in &stream.relations {
            for id in &relation.outputs {
                let node = index.node(id)?;
                self.visit(&index, node)?;
            }
        }

        Ok(())
    }

    fn visit(&mut self, index: &StreamIndex<'_>, node: &Node) -> Result<()> {
        if self.visited.contains(&node.id) {
            warn!(node_id = %node.id, "node has already been compiled, skipping");
            return Ok(());
        }

        self.visit_node(index, node)
            .map_err(|e| e.context(err!("compile node {}", node.id)))?;

        self.visited.insert(node.id.clone());
        Ok(())
    }

    fn visit_node(&mut self, index: &StreamIndex<'_>, node: &Node) -> Result<()> {
        let role = node.role();

        if role == NodeRole::Extract {
            verify::extract(node)?;
            let stmt = Statement::create_table(node)?;
            self.create(node, &stmt);
            return Ok(());
        }

        let relation = index.owner(&node.id)?;

        ensure_valid!(
            self.in_progress.insert(node.id.clone()),
            "dependency cycle detected at node {}",
            node.id
        );

        // Arity is checked before any input is compiled
        verify::relation(node, relation)?;

        for id in &relation.inputs {
            if !self.visited.contains(id) {
                let upstream = index.node(id)?;
                self.visit(index, upstream)?;
            }
        }

        if role == NodeRole::Load {
            let stmt = Statement::create_table(node)?;
            self.create(node, &stmt);

            let query = select::load_query(index, node, relation)?;
            let sql = self.serializer.serialize(&Statement::insert(node, query));
            debug!(node_id = %node.id, %sql, "compiled insert");
            self.compilation.insert(sql);
        } else {
            let query = select::view_query(index, node, relation)?;
            self.create(node, &Statement::create_view(node, query));
        }

        self.in_progress.remove(&node.id);
        Ok(())
    }

    fn create(&mut self, node: &Node, stmt: &Statement) {
        let sql = self.serializer.serialize(stmt);
        debug!(node_id = %node.id, %sql, "compiled create statement");
        self.compilation.create(node.role(), &node.id, sql);
    }
}
