use anyhow::{Result, anyhow};
use std::sync::Arc;
use swc_common::{BytePos, FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax};

pub struct ParsedModule {
    pub module: Module,
    /// Position of the first byte of the file in the source map.
    ///
    /// Subtract it from a span's `lo`/`hi` to get byte offsets into the text.
    pub start_pos: BytePos,
}

impl ParsedModule {
    /// Convert an swc position into a byte offset within the parsed text.
    pub fn offset(&self, pos: BytePos) -> usize {
        pos.0.saturating_sub(self.start_pos.0) as usize
    }
}

/// Parse JavaScript (JSX allowed) source code into an AST.
pub fn parse_js_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedModule> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        Ok(ParsedModule {
            module,
            start_pos: source_file.start_pos,
        })
    })
}
