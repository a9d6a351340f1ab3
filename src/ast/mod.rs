/// AST module
/// Contains the parse tree produced by the parser
///
/// Submodules:
/// - ast: Node definition, node categories and tree printing
/// - render: Rendering a tree back into source text
pub mod ast;
pub mod render;
