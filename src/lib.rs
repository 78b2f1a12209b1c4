use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

pub use error::{ParseError, Reason, TranslateError};
pub use fun::{Module, Translator};
use parser::{ast::File, Filter, SourceMap};

mod error;
pub mod fun;
pub mod parser;

/// What to do with character literals holding more than one code point, e.g. `'\n'`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CharLiterals {
    /// Keep the first code point
    #[default]
    Truncate,
    Reject,
}

/// Global configuration for translating Go code.
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Fail on top-level `var`, `const` and `type` declarations instead of skipping them.
    pub strict_top_levels: bool,
    pub char_literals: CharLiterals,
}

/// A parsed Go file with everything needed to translate or inspect it.
pub struct ParsedFile<'src> {
    files: SourceMap,
    file: File<'src>,
}

impl<'src> ParsedFile<'src> {
    pub fn file(&self) -> &File<'src> {
        &self.file
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.files
    }

    pub fn translate(&self, config: &Config) -> Result<Module, TranslateError> {
        Translator::new(&self.files, config).module(&self.file)
    }

    /// Render the whole syntax tree.
    pub fn dump(&self, filter: Filter) -> String {
        parser::dump::render(&self.files, &self.file, filter)
    }
}

/// Parse Go source. `name` shows up in positions of diagnostics.
pub fn parse_source<'src>(name: &str, src: &'src str) -> Result<ParsedFile<'src>> {
    let file = match parser::parse_file(src) {
        Ok(file) => file,
        Err(errs) => {
            let report = parser::report_errors(src, &errs)?;
            return Err(ParseError {
                name: name.to_string(),
                count: errs.len(),
                report,
            }
            .into());
        }
    };
    debug!(name, decls = file.decls.len(), "parsed source");

    Ok(ParsedFile {
        files: SourceMap::new(name, src),
        file,
    })
}

pub fn translate_source(name: &str, src: &str, config: &Config) -> Result<Module> {
    let parsed = parse_source(name, src)?;
    Ok(parsed.translate(config)?)
}

/// Read a Go file from disk and translate it.
pub fn translate_file(path: impl AsRef<Path>, config: &Config) -> Result<Module> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("Can't read {}", path.display()))?;
    translate_source(&path.display().to_string(), &src, config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::fun::tree::{
        Application, BinaryOp, Expr, FuncBody, FuncDecl, FuncName, Import, Module, Operator,
        Param, TopLevel, Type,
    };
    use crate::parser::Filter;
    use crate::{
        parse_source, translate_source, CharLiterals, Config, ParseError, Reason, TranslateError,
    };

    const FULL_SOURCE: &str = r#"
	package main

	import (
		"fmt"
		"io"
	)

	func inc(val int) int {
		return val + 1
	}

	func print42() {
		fmt.Println(42)
	}

	func main() {
		line := "Hello World!"
		fmt.Fprintln(io.Discard, line)
	}
	"#;

    fn reason_of(err: &anyhow::Error) -> Option<Reason> {
        err.downcast_ref::<TranslateError>()
            .and_then(TranslateError::reason)
    }

    #[test]
    fn test_translate_package() {
        let module = translate_source("source.go", FULL_SOURCE, &Config::default()).unwrap();

        let expected = Module {
            name: "main".into(),
            imports: vec![Import { path: "fmt".into() }, Import { path: "io".into() }],
            top_levels: vec![
                TopLevel::FuncDecl(FuncDecl {
                    name: "inc".into(),
                    params: vec![Param {
                        name: "val".into(),
                        ty: Type::Atomic("int".into()),
                    }],
                    results: vec![Type::Atomic("int".into())],
                    body: FuncBody::Single(Expr::BinaryOp(BinaryOp {
                        x: Box::new(Expr::Var("val".into())),
                        op: Operator("+".into()),
                        y: Box::new(Expr::IntegerLit(1)),
                    })),
                }),
                TopLevel::FuncDecl(FuncDecl {
                    name: "print42".into(),
                    params: vec![],
                    results: vec![],
                    body: FuncBody::Single(Expr::Application(Application {
                        name: FuncName("fmt.Println".into()),
                        args: vec![Expr::IntegerLit(42)],
                    })),
                }),
                TopLevel::FuncDecl(FuncDecl {
                    name: "main".into(),
                    params: vec![],
                    results: vec![],
                    body: FuncBody::Inline(vec![
                        r#"line := "Hello World!""#.into(),
                        "fmt.Fprintln(io.Discard, line)".into(),
                    ]),
                }),
            ],
        };
        assert_eq!(module, expected);
    }

    #[test]
    fn test_deterministic() {
        let parsed = parse_source("source.go", FULL_SOURCE).unwrap();
        let config = Config::default();
        assert_eq!(
            parsed.translate(&config).unwrap(),
            parsed.translate(&config).unwrap()
        );
    }

    #[test]
    fn test_naked_return() {
        let src = "package foo\n\nfunc noop() {\n\treturn\n}\n";
        let err = translate_source("noop.go", src, &Config::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "result list of zero length is not supported:\n     0  ReturnStmt {\n     1  .  return_pos: noop.go:4:2\n     2  }\n"
        );
    }

    #[test]
    fn test_return_tuple() {
        let src = "package main\n\nfunc pair() (rune, float64) {\n\treturn 'a', 9.99\n}\n";
        let module = translate_source("pair.go", src, &Config::default()).unwrap();
        let TopLevel::FuncDecl(pair) = &module.top_levels[0];
        assert_eq!(
            pair.body,
            FuncBody::Single(Expr::Results(vec![
                Expr::CharLit('a'),
                Expr::DoubleLit(9.99)
            ]))
        );
    }

    #[test]
    fn test_forward_declaration() {
        let src = "package main\n\nfunc external() int\n";
        let err = translate_source("ext.go", src, &Config::default()).unwrap_err();
        assert_eq!(reason_of(&err), Some(Reason::EmptyBody));
    }

    #[test]
    fn test_top_levels() {
        let src = r#"package main

const limit = 10

type Counter int

var total int

func one() int {
	return 1
}
"#;
        let module = translate_source("top.go", src, &Config::default()).unwrap();
        assert_eq!(module.top_levels.len(), 1);

        let config = Config {
            strict_top_levels: true,
            ..Default::default()
        };
        let err = translate_source("top.go", src, &config).unwrap_err();
        assert_eq!(reason_of(&err), Some(Reason::UnsupportedTopLevel));
        assert!(err
            .to_string()
            .starts_with("top-level declaration is not supported:\n     0  GenDecl {\n"));
    }

    #[test]
    fn test_import_alias() {
        let src = "package main\n\nimport f \"fmt\"\n";
        let err = translate_source("alias.go", src, &Config::default()).unwrap_err();
        assert_eq!(reason_of(&err), Some(Reason::ImportAlias));

        let src = "package main\n\nimport _ \"embed\"\n";
        let err = translate_source("alias.go", src, &Config::default()).unwrap_err();
        assert_eq!(reason_of(&err), Some(Reason::ImportAlias));
    }

    #[test]
    fn test_literal_errors() {
        let src = "package main\n\nfunc h() int {\n\treturn 0x1F\n}\n";
        let err = translate_source("hex.go", src, &Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TranslateError>(),
            Some(TranslateError::Integer(_))
        ));

        let src = "package main\n\nfunc c() complex128 {\n\treturn 2i\n}\n";
        let err = translate_source("imag.go", src, &Config::default()).unwrap_err();
        assert_eq!(reason_of(&err), Some(Reason::UnexpectedLiteral));

        let src = "package main\n\nfunc nl() rune {\n\treturn '\\n'\n}\n";
        let module = translate_source("nl.go", src, &Config::default()).unwrap();
        let TopLevel::FuncDecl(nl) = &module.top_levels[0];
        assert_eq!(nl.body, FuncBody::Single(Expr::CharLit('\\')));

        let config = Config {
            char_literals: CharLiterals::Reject,
            ..Default::default()
        };
        let err = translate_source("nl.go", src, &config).unwrap_err();
        assert_eq!(reason_of(&err), Some(Reason::InvalidChar));
    }

    #[test]
    fn test_inline_switch_and_composite() {
        let src = "package main\n\nfunc classify(n int) string {\n\txs := []int{1, 2}\n\tswitch {\n\tcase n > len(xs):\n\t\treturn \"big\"\n\tdefault:\n\t\treturn \"small\"\n\t}\n}\n";
        let module = translate_source("classify.go", src, &Config::default()).unwrap();
        let TopLevel::FuncDecl(classify) = &module.top_levels[0];
        assert_eq!(classify.results, vec![Type::Atomic("string".into())]);
        assert_eq!(
            classify.body,
            FuncBody::Inline(vec![
                "xs := []int{1, 2}".into(),
                "switch {\ncase n > len(xs):\n\treturn \"big\"\ndefault:\n\treturn \"small\"\n}"
                    .into(),
            ])
        );
    }

    #[test]
    fn test_method() {
        let src = "package main\n\nfunc (t T) Get() int {\n\treturn 1\n}\n";
        let module = translate_source("method.go", src, &Config::default()).unwrap();
        assert_eq!(
            module.top_levels,
            vec![TopLevel::FuncDecl(FuncDecl {
                name: "Get".into(),
                params: vec![],
                results: vec![Type::Atomic("int".into())],
                body: FuncBody::Single(Expr::IntegerLit(1)),
            })]
        );
    }

    #[test]
    fn test_hex_float_and_unicode() {
        let src = "package main\n\nfunc quarter() float64 {\n\treturn 0x1p-2\n}\n";
        let module = translate_source("quarter.go", src, &Config::default()).unwrap();
        let TopLevel::FuncDecl(quarter) = &module.top_levels[0];
        assert_eq!(quarter.body, FuncBody::Single(Expr::DoubleLit(0.25)));

        let src = "package main\n\nfunc tau(π float64) float64 {\n\treturn 2 * π\n}\n";
        let module = translate_source("tau.go", src, &Config::default()).unwrap();
        let TopLevel::FuncDecl(tau) = &module.top_levels[0];
        assert_eq!(
            tau.params,
            vec![Param {
                name: "π".into(),
                ty: Type::Atomic("float64".into()),
            }]
        );
        assert_eq!(
            tau.body,
            FuncBody::Single(Expr::BinaryOp(BinaryOp {
                x: Box::new(Expr::IntegerLit(2)),
                op: Operator("*".into()),
                y: Box::new(Expr::Var("π".into())),
            }))
        );
    }

    #[test]
    fn test_parse_errors() {
        let err = parse_source("test.go", "package main\n99bottles").err().unwrap();
        let err = err.downcast_ref::<ParseError>().unwrap();
        assert_eq!(err.name, "test.go");
        assert!(err.count > 0);
        assert!(err.report.contains("Error"));
    }

    #[test]
    fn test_dump() {
        let parsed = parse_source("", "package main\n\nimport \"fmt\"\n").unwrap();
        assert_eq!(
            parsed.dump(Filter::Compact),
            r#"     0  File {
     1  .  name: Ident {
     2  .  .  name: "main"
     3  .  }
     4  .  imports: [] (len = 1) {
     5  .  .  0: ImportSpec {
     6  .  .  .  path: BasicLit {
     7  .  .  .  .  kind: STRING
     8  .  .  .  .  value: "\"fmt\""
     9  .  .  .  }
    10  .  .  }
    11  .  }
    12  }
"#
        );
        assert!(parsed
            .dump(Filter::All)
            .contains("     3  .  .  name_pos: 1:9\n"));
    }
}
