use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::prelude::*;

use self::ast::{
    ArrayType, AssignStmt, AssignTok, BasicLit, BinaryExpr, BinaryOp, BlockStmt, BranchStmt,
    BranchTok, CallExpr, CaseClause, ChanDir, ChanType, CommClause, CompositeLit, Decl, DeclTok,
    DeferStmt, Ellipsis, Expr, ExprStmt, Field, FieldList, File, ForStmt, FuncDecl, FuncLit,
    FuncType, GenDecl, GoStmt, Ident, IfStmt, ImportSpec, IncDec, IncDecStmt, IndexExpr,
    InterfaceType, KeyValueExpr, LabeledStmt, LitKind, MapType, ParenExpr, Pos, RangeStmt,
    ReturnStmt, SelectStmt, SelectorExpr, SendStmt, SliceExpr, Span, Spec, StarExpr, Stmt,
    StructType, SwitchStmt, TypeAssertExpr, TypeSpec, TypeSwitchStmt, UnaryExpr, UnaryOp,
    ValueSpec,
};

pub mod ast;
pub mod dump;
mod pos;
pub mod print;
mod resolve;

pub use self::dump::{Dump, Filter};
pub use self::pos::{Position, SourceMap};

type ParserInput<'src> = &'src str;
type ParserError<'src> = extra::Err<Rich<'src, char, Span>>;

// Future (Alias type is not in stable yet):
// type GoParser<'src, O> = impl Parser<'src, ParserInput<'src>, O, ParserError<'src>> + Clone;
//
// Now:
trait GoParser<'src, O>: Parser<'src, ParserInput<'src>, O, ParserError<'src>> + Clone {}
impl<'src, O, T> GoParser<'src, O> for T where
    T: Parser<'src, ParserInput<'src>, O, ParserError<'src>> + Clone
{
}
//
// Thanks to https://github.com/rust-lang/rust/issues/41517#issuecomment-1100644808

const KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Parse a Go source file and resolve its identifiers.
pub fn parse_file(src: &str) -> Result<File<'_>, Vec<Rich<'_, char, Span>>> {
    let (parsed, errs) = file_parser().parse(src).into_output_errors();

    match parsed {
        Some(mut file) if errs.is_empty() => {
            resolve::resolve(&mut file);
            Ok(file)
        }
        _ => Err(errs),
    }
}

/// Render parse errors as plain text reports.
pub fn report_errors(src: &str, errs: &[Rich<'_, char, Span>]) -> std::io::Result<String> {
    let mut out = Vec::new();

    for e in errs {
        Report::build(ReportKind::Error, /* filename */ (), e.span().start)
            .with_config(ariadne::Config::default().with_color(false))
            .with_message(e.to_string())
            .with_label(
                Label::new((/* filename */ (), e.span().into_range()))
                    .with_message(e.reason().to_string())
                    .with_color(Color::Red),
            )
            .with_labels(e.contexts().map(|(label, span)| {
                Label::new((/* filename */ (), span.into_range()))
                    .with_message(format!("while parsing this {}", label))
                    .with_color(Color::Yellow)
            }))
            .finish()
            .write(Source::from(src), &mut out)?;
    }

    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// File = package Ident ( ; ImportDecl )* ( ; TopLevelDecl )* ;?
pub fn file_parser<'src>(
) -> impl Parser<'src, ParserInput<'src>, File<'src>, ParserError<'src>> + Clone {
    let decl = decl_parser();

    let import_spec = choice((tok(".").map(|pos| Ident::new(".", pos)), ident()))
        .or_not()
        .then(basic_lit())
        .map(|(name, path)| ImportSpec {
            name,
            path: Expr::BasicLit(path),
        })
        .labelled("import spec");

    let import_decl = kw("import")
        .ignore_then(choice((
            tok_nl("(")
                .ignore_then(
                    import_spec
                        .clone()
                        .separated_by(sep())
                        .allow_trailing()
                        .collect::<Vec<_>>(),
                )
                .then_ignore(tok(")")),
            import_spec.map(|spec| vec![spec]),
        )))
        .labelled("import");

    nl_ws()
        .ignore_then(kw("package"))
        .then(ident())
        .then(
            sep()
                .ignore_then(import_decl)
                .repeated()
                .collect::<Vec<_>>(),
        )
        .then(sep().ignore_then(decl).repeated().collect::<Vec<_>>())
        .then_ignore(sep().or_not())
        .then_ignore(nl_ws())
        .then_ignore(end())
        .map(|(((package, name), imports), decls)| File {
            package,
            name,
            imports: imports.into_iter().flatten().collect(),
            decls,
        })
        .boxed()
}

/// Line or block comment
fn comment<'src>() -> impl GoParser<'src, ()> {
    let line = just("//").then(none_of('\n').repeated()).to(());

    let block = just("/*")
        .then(
            choice((
                none_of('*').to(()),
                just('*')
                    .then(just('/').or_not())
                    .filter(|(_, slash)| slash.is_none())
                    .to(()),
            ))
            .repeated(),
        )
        .then(just("*/"))
        .to(());

    line.or(block)
}

/// Whitespace that does not end a statement
fn ws<'src>() -> impl GoParser<'src, ()> {
    one_of(" \t\r").to(()).or(comment()).repeated()
}

/// Whitespace including newlines
fn nl_ws<'src>() -> impl GoParser<'src, ()> {
    one_of(" \t\r\n").to(()).or(comment()).repeated()
}

/// Statement separator: a semicolon or a line break
fn sep<'src>() -> impl GoParser<'src, ()> {
    ws().then(one_of(";\n")).then(nl_ws()).to(())
}

/// Token that must stay on the current line
fn tok<'src>(text: &'static str) -> impl GoParser<'src, Pos> {
    just(text)
        .map_with(|_, e| { let span: Span = e.span(); Pos::from(span) })
        .then_ignore(ws())
}

/// Token that may be followed by a line break
fn tok_nl<'src>(text: &'static str) -> impl GoParser<'src, Pos> {
    just(text)
        .map_with(|_, e| { let span: Span = e.span(); Pos::from(span) })
        .then_ignore(nl_ws())
}

/// Identifier or keyword. Letters and digits are Unicode ones: `π`, `größe`.
fn word<'src>() -> impl GoParser<'src, &'src str> {
    any()
        .filter(|c: &char| c.is_alphabetic() || *c == '_')
        .then(
            any()
                .filter(|c: &char| c.is_alphanumeric() || *c == '_')
                .repeated(),
        )
        .to_slice()
}

fn kw<'src>(text: &'static str) -> impl GoParser<'src, Pos> {
    word()
        .filter(move |w| *w == text)
        .map_with(|_, e| { let span: Span = e.span(); Pos::from(span) })
        .then_ignore(ws())
}

fn ident<'src>() -> impl GoParser<'src, Ident<'src>> {
    word()
        .filter(|name| !KEYWORDS.iter().any(|kw| kw == name))
        .map_with(|name, e| { let span: Span = e.span(); Ident::new(name, span.into()) })
        .then_ignore(ws())
        .labelled("identifier")
}

/// Binary operator that is not the prefix of a longer token
fn op<'src>(
    text: &'static str,
    forbidden: &'static str,
    op: BinaryOp,
) -> impl GoParser<'src, (Pos, BinaryOp)> {
    just(text)
        .then(one_of(forbidden).or_not())
        .filter(|(_, next)| next.is_none())
        .map_with(move |_, e| { let span: Span = e.span(); (Pos::from(span), op) })
        .then_ignore(nl_ws())
}

/// BasicLit = Int | Float | Imag | Char | String
fn basic_lit<'src>() -> impl GoParser<'src, BasicLit<'src>> {
    let digit = any().filter(|c: &char| c.is_ascii_digit());
    let digits = any()
        .filter(|c: &char| c.is_ascii_digit() || *c == '_')
        .repeated();
    let exponent = one_of("eE")
        .then(one_of("+-").or_not())
        .then(digit.clone())
        .then(digits.clone());

    let hex_digits = any()
        .filter(|c: &char| c.is_ascii_hexdigit() || *c == '_')
        .repeated();
    // 0x1F, or a hex float with a binary exponent: 0x1.8p3
    let hex = just('0')
        .then(one_of("xX"))
        .then(hex_digits.clone())
        .then(just('.').then(hex_digits).or_not())
        .then(
            one_of("pP")
                .then(one_of("+-").or_not())
                .then(digit.clone())
                .then(digits.clone())
                .or_not(),
        )
        .to_slice()
        .filter(|text: &&str| text[2..].chars().any(|c| c.is_ascii_hexdigit()))
        .to(());
    let radix = just('0')
        .then(one_of("oObB"))
        .then(
            any()
                .filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_')
                .repeated()
                .at_least(1),
        )
        .to(());
    let decimal = digit
        .clone()
        .then(digits.clone())
        .then(just('.').then(digits.clone()).or_not())
        .then(exponent.clone().or_not())
        .to(());
    let fraction = just('.')
        .then(digit)
        .then(digits)
        .then(exponent.or_not())
        .to(());

    let number = choice((hex, radix, decimal, fraction))
        .then(just('i').or_not())
        .to_slice()
        .map(|text| (LitKind::of_number(text), text))
        .labelled("number");

    let escape = just('\\').then(any()).to(());

    let interpreted = just('"')
        .then(none_of("\\\"\n").to(()).or(escape.clone()).repeated())
        .then(just('"'))
        .to_slice();
    let raw = just('`').then(none_of('`').repeated()).then(just('`')).to_slice();
    let string = interpreted
        .or(raw)
        .map(|text| (LitKind::String, text))
        .labelled("string");

    let char_ = just('\'')
        .then(none_of("\\'\n").to(()).or(escape).repeated())
        .then(just('\''))
        .to_slice()
        .map(|text| (LitKind::Char, text))
        .labelled("char");

    choice((number, string, char_))
        .map_with(|(kind, value), e| BasicLit {
            value_pos: { let span: Span = e.span(); span.into() },
            kind,
            value,
        })
        .then_ignore(ws())
        .boxed()
}

enum Postfix<'src> {
    Selector(Ident<'src>),
    Index {
        lbrack: Pos,
        index: Expr<'src>,
        rbrack: Pos,
    },
    Slice {
        lbrack: Pos,
        low: Option<Expr<'src>>,
        high: Option<Expr<'src>>,
        max: Option<Expr<'src>>,
        rbrack: Pos,
    },
    TypeAssert {
        lparen: Pos,
        ty: Option<Expr<'src>>,
        rparen: Pos,
    },
    Call {
        lparen: Pos,
        args: Vec<Expr<'src>>,
        ellipsis: Pos,
        rparen: Pos,
    },
    Composite {
        lbrace: Pos,
        elts: Vec<Expr<'src>>,
        rbrace: Pos,
    },
}

impl<'src> Postfix<'src> {
    fn apply(self, x: Expr<'src>) -> Expr<'src> {
        let x = Box::new(x);
        match self {
            Postfix::Selector(sel) => Expr::Selector(SelectorExpr { x, sel }),
            Postfix::Index {
                lbrack,
                index,
                rbrack,
            } => Expr::Index(IndexExpr {
                x,
                lbrack,
                index: Box::new(index),
                rbrack,
            }),
            Postfix::Slice {
                lbrack,
                low,
                high,
                max,
                rbrack,
            } => Expr::Slice(SliceExpr {
                x,
                lbrack,
                low: low.map(Box::new),
                high: high.map(Box::new),
                max: max.map(Box::new),
                rbrack,
            }),
            Postfix::TypeAssert { lparen, ty, rparen } => Expr::TypeAssert(TypeAssertExpr {
                x,
                lparen,
                ty: ty.map(Box::new),
                rparen,
            }),
            Postfix::Call {
                lparen,
                args,
                ellipsis,
                rparen,
            } => Expr::Call(CallExpr {
                fun: x,
                lparen,
                args,
                ellipsis,
                rparen,
            }),
            Postfix::Composite {
                lbrace,
                elts,
                rbrace,
            } => Expr::CompositeLit(CompositeLit {
                ty: Some(x),
                lbrace,
                elts,
                rbrace,
            }),
        }
    }
}

enum Clause<'src> {
    Range {
        key: Option<(Expr<'src>, Option<Expr<'src>>)>,
        tok: Option<(Pos, AssignTok)>,
        x: Expr<'src>,
    },
    Three {
        init: Option<Stmt<'src>>,
        cond: Option<Expr<'src>>,
        post: Option<Stmt<'src>>,
    },
    Cond(Expr<'src>),
}

fn build_binary<'src>(
    x: Expr<'src>,
    ((op_pos, op), y): ((Pos, BinaryOp), Expr<'src>),
) -> Expr<'src> {
    Expr::Binary(BinaryExpr {
        x: Box::new(x),
        op_pos,
        op,
        y: Box::new(y),
    })
}

fn build_gen_decl<'src>(
    tok: DeclTok,
) -> impl Fn((Pos, (Pos, Vec<Spec<'src>>, Pos))) -> GenDecl<'src> + Clone {
    move |(tok_pos, (lparen, specs, rparen))| GenDecl {
        tok_pos,
        tok,
        lparen,
        specs,
        rparen,
    }
}

/// Group parameter entries the way Go does: `a, b int` declares two names of one type.
/// When no entry is named every entry is a bare type.
fn group_params<'src>(entries: Vec<(Option<Ident<'src>>, Expr<'src>)>) -> Vec<Field<'src>> {
    let field = |names, ty| Field {
        names,
        ty,
        tag: None,
    };

    if entries.iter().all(|(name, _)| name.is_none()) {
        return entries
            .into_iter()
            .map(|(_, ty)| field(vec![], ty))
            .collect();
    }

    let mut fields = vec![];
    let mut pending = vec![];
    for (name, ty) in entries {
        match (name, ty) {
            (Some(name), ty) => {
                pending.push(name);
                fields.push(field(std::mem::take(&mut pending), ty));
            }
            (None, Expr::Ident(name)) => pending.push(name),
            (None, ty) => fields.push(field(vec![], ty)),
        }
    }
    fields.extend(
        pending
            .into_iter()
            .map(|name| field(vec![], Expr::Ident(name))),
    );
    fields
}

/// `x.(type)` or `v := x.(type)`
fn is_type_guard(stmt: &Stmt<'_>) -> bool {
    let x = match stmt {
        Stmt::Expr(s) => &s.x,
        Stmt::Assign(s) if s.tok == AssignTok::Define && s.lhs.len() == 1 && s.rhs.len() == 1 => {
            &s.rhs[0]
        }
        _ => return false,
    };
    matches!(x, Expr::TypeAssert(assert) if assert.ty.is_none())
}

/// SpecGroup = Spec | ( ( Spec ; )* )
fn spec_group<'src>(
    spec: impl GoParser<'src, Spec<'src>>,
) -> impl GoParser<'src, (Pos, Vec<Spec<'src>>, Pos)> {
    choice((
        tok_nl("(")
            .then(
                spec.clone()
                    .separated_by(sep())
                    .allow_trailing()
                    .collect::<Vec<_>>(),
            )
            .then(tok(")"))
            .map(|((lparen, specs), rparen)| (lparen, specs, rparen)),
        spec.map(|spec| (Pos::NONE, vec![spec], Pos::NONE)),
    ))
}

/// UnaryExpr = unary_op* PrimaryExpr
fn unary_expr<'src>(
    primary: impl GoParser<'src, Expr<'src>> + 'src,
) -> impl GoParser<'src, Expr<'src>> {
    // `None` stands for the dereference `*`
    let prefix = choice((
        just("<-").to(Some(UnaryOp::Arrow)),
        just('*').to(None),
        just('+').to(Some(UnaryOp::Add)),
        just('-').to(Some(UnaryOp::Sub)),
        just('!').to(Some(UnaryOp::Not)),
        just('^').to(Some(UnaryOp::Xor)),
        just('&').to(Some(UnaryOp::And)),
    ))
    .map_with(|op, e| { let span: Span = e.span(); (Pos::from(span), op) })
    .then_ignore(ws());

    prefix
        .repeated()
        .foldr(primary, |(pos, op), x| match (op, x) {
            (None, x) => Expr::Star(StarExpr {
                star: pos,
                x: Box::new(x),
            }),
            // `<-chan T` is a receive-only channel type
            (
                Some(UnaryOp::Arrow),
                Expr::ChanType(ChanType {
                    dir: ChanDir::Both,
                    value,
                    ..
                }),
            ) => Expr::ChanType(ChanType {
                begin: pos,
                dir: ChanDir::Recv,
                value,
            }),
            (Some(op), x) => Expr::Unary(UnaryExpr {
                op_pos: pos,
                op,
                x: Box::new(x),
            }),
        })
        .boxed()
}

/// Binary operators, from the strongest binding to the weakest
fn binary_expr<'src>(
    unary: impl GoParser<'src, Expr<'src>> + 'src,
) -> impl GoParser<'src, Expr<'src>> {
    let product = unary
        .clone()
        .foldl(
            choice((
                op("*", "=", BinaryOp::Mul),
                op("/", "=", BinaryOp::Quo),
                op("%", "=", BinaryOp::Rem),
                op("<<", "=", BinaryOp::Shl),
                op(">>", "=", BinaryOp::Shr),
                op("&^", "=", BinaryOp::AndNot),
                op("&", "&^=", BinaryOp::And),
            ))
            .then(unary)
            .repeated(),
            build_binary,
        )
        .boxed();

    let sum = product
        .clone()
        .foldl(
            choice((
                op("+", "+=", BinaryOp::Add),
                op("-", "-=", BinaryOp::Sub),
                op("|", "|=", BinaryOp::Or),
                op("^", "=", BinaryOp::Xor),
            ))
            .then(product)
            .repeated(),
            build_binary,
        )
        .boxed();

    let compare = sum
        .clone()
        .foldl(
            choice((
                op("==", "", BinaryOp::Eql),
                op("!=", "", BinaryOp::Neq),
                op("<=", "", BinaryOp::Leq),
                op(">=", "", BinaryOp::Geq),
                op("<", "<=-", BinaryOp::Lss),
                op(">", ">=", BinaryOp::Gtr),
            ))
            .then(sum)
            .repeated(),
            build_binary,
        )
        .boxed();

    let and = compare
        .clone()
        .foldl(
            op("&&", "", BinaryOp::LAnd).then(compare).repeated(),
            build_binary,
        )
        .boxed();

    and.clone()
        .foldl(
            op("||", "", BinaryOp::LOr).then(and).repeated(),
            build_binary,
        )
        .boxed()
}

/// SimpleStmt = Assignment | SendStmt | IncDecStmt | ExpressionStmt
fn simple_stmt<'src>(
    expr: impl GoParser<'src, Expr<'src>> + 'src,
) -> impl GoParser<'src, Stmt<'src>> {
    let expr_list = expr
        .clone()
        .separated_by(tok_nl(","))
        .at_least(1)
        .collect::<Vec<_>>();

    let assign_tok = choice((
        just(":=").to(AssignTok::Define),
        just("<<=").to(AssignTok::Shl),
        just(">>=").to(AssignTok::Shr),
        just("&^=").to(AssignTok::AndNot),
        just("+=").to(AssignTok::Add),
        just("-=").to(AssignTok::Sub),
        just("*=").to(AssignTok::Mul),
        just("/=").to(AssignTok::Quo),
        just("%=").to(AssignTok::Rem),
        just("&=").to(AssignTok::And),
        just("|=").to(AssignTok::Or),
        just("^=").to(AssignTok::Xor),
        just("=").to(AssignTok::Assign),
    ))
    .map_with(|tok, e| { let span: Span = e.span(); (Pos::from(span), tok) })
    .then_ignore(nl_ws());

    let inc_dec = choice((just("++").to(IncDec::Inc), just("--").to(IncDec::Dec)))
        .map_with(|tok, e| { let span: Span = e.span(); (Pos::from(span), tok) })
        .then_ignore(ws());

    let arrow = just("<-")
        .map_with(|_, e| { let span: Span = e.span(); Pos::from(span) })
        .then_ignore(nl_ws());

    choice((
        expr_list
            .clone()
            .then(assign_tok)
            .then(expr_list)
            .map(|((lhs, (tok_pos, tok)), rhs)| {
                Stmt::Assign(AssignStmt {
                    lhs,
                    tok_pos,
                    tok,
                    rhs,
                })
            }),
        expr.clone()
            .then(arrow)
            .then(expr.clone())
            .map(|((chan, arrow), value)| Stmt::Send(SendStmt { chan, arrow, value })),
        expr.clone()
            .then(inc_dec)
            .map(|(x, (tok_pos, tok))| Stmt::IncDec(IncDecStmt { x, tok_pos, tok })),
        expr.map(|x| Stmt::Expr(ExprStmt { x })),
    ))
    .boxed()
}

/// TopLevelDecl = FuncDecl | GenDecl
///
/// Statements, expressions and types are only reachable through declarations, so their grammar
/// lives here too.
fn decl_parser<'src>() -> impl GoParser<'src, Decl<'src>> {
    let mut expr = Recursive::declare();
    let mut ty = Recursive::declare();
    let mut stmt = Recursive::declare();
    let mut lit_value = Recursive::declare();

    let block = tok_nl("{")
        .then(
            stmt.clone()
                .separated_by(sep())
                .allow_trailing()
                .collect::<Vec<_>>(),
        )
        .then(tok("}"))
        .map(|((lbrace, list), rbrace)| BlockStmt {
            lbrace,
            list,
            rbrace,
        })
        .labelled("block")
        .boxed();

    // Signatures

    // ParameterType = ...? Type
    let param_type = tok("...")
        .then(ty.clone())
        .map(|(ellipsis, elt)| {
            Expr::Ellipsis(Ellipsis {
                ellipsis,
                elt: Some(Box::new(elt)),
            })
        })
        .or(ty.clone());

    // Param = Ident ParameterType | ParameterType
    let param = ident()
        .then(param_type.clone())
        .map(|(name, ty)| (Some(name), ty))
        .or(param_type.map(|ty| (None, ty)));

    let params = tok_nl("(")
        .then(
            param
                .separated_by(tok_nl(","))
                .allow_trailing()
                .collect::<Vec<_>>(),
        )
        .then_ignore(nl_ws())
        .then(tok(")"))
        .map(|((opening, entries), closing)| FieldList {
            opening,
            list: group_params(entries),
            closing,
        })
        .labelled("parameters")
        .boxed();

    let results = choice((
        params.clone(),
        ty.clone().map(|ty| FieldList {
            list: vec![Field {
                names: vec![],
                ty,
                tag: None,
            }],
            ..FieldList::default()
        }),
    ));

    // Signature = Params Results?
    let signature = params.clone().then(results.or_not()).boxed();

    // Types

    // TypeName = Ident ( . Ident )?
    let type_name = ident()
        .then(tok(".").ignore_then(ident()).or_not())
        .map(|(x, sel)| match sel {
            Some(sel) => Expr::Selector(SelectorExpr {
                x: Box::new(Expr::Ident(x)),
                sel,
            }),
            None => Expr::Ident(x),
        });

    let pointer_type = tok("*")
        .then(ty.clone())
        .map(|(star, x)| Expr::Star(StarExpr { star, x: Box::new(x) }));

    // ArrayType = [ ( Expr | ... )? ] Type
    let array_type = tok_nl("[")
        .then(
            choice((
                tok_nl("...").map(|ellipsis| Expr::Ellipsis(Ellipsis { ellipsis, elt: None })),
                expr.clone(),
            ))
            .or_not(),
        )
        .then_ignore(tok("]"))
        .then(ty.clone())
        .map(|((lbrack, len), elt)| {
            Expr::ArrayType(ArrayType {
                lbrack,
                len: len.map(Box::new),
                elt: Box::new(elt),
            })
        })
        .boxed();

    let map_type = kw("map")
        .then_ignore(tok("["))
        .then(ty.clone())
        .then_ignore(tok("]"))
        .then(ty.clone())
        .map(|((map_pos, key), value)| {
            Expr::MapType(MapType {
                map_pos,
                key: Box::new(key),
                value: Box::new(value),
            })
        })
        .boxed();

    // ChanType = ( chan | chan <- | <- chan ) Type
    let chan_type = choice((
        kw("chan")
            .then_ignore(tok("<-"))
            .map(|begin| (begin, ChanDir::Send)),
        kw("chan").map(|begin| (begin, ChanDir::Both)),
        tok("<-")
            .then_ignore(kw("chan"))
            .map(|begin| (begin, ChanDir::Recv)),
    ))
    .then(ty.clone())
    .map(|((begin, dir), value)| {
        Expr::ChanType(ChanType {
            begin,
            dir,
            value: Box::new(value),
        })
    })
    .boxed();

    // FieldDecl = ( Ident ( , Ident )* Type | EmbeddedField ) Tag?
    let struct_field = ident()
        .separated_by(tok(","))
        .at_least(1)
        .collect::<Vec<_>>()
        .then(ty.clone())
        .or(ty.clone().map(|ty| (vec![], ty)))
        .then(basic_lit().or_not())
        .map(|((names, ty), tag)| Field { names, ty, tag });

    let struct_type = kw("struct")
        .then(tok_nl("{"))
        .then(
            struct_field
                .separated_by(sep())
                .allow_trailing()
                .collect::<Vec<_>>(),
        )
        .then(tok("}"))
        .map(|(((struct_pos, opening), list), closing)| {
            Expr::StructType(StructType {
                struct_pos,
                fields: FieldList {
                    opening,
                    list,
                    closing,
                },
            })
        })
        .boxed();

    // MethodSpec = Ident Signature | TypeName
    let method_spec = ident()
        .then(signature.clone())
        .map(|(name, (params, results))| Field {
            names: vec![name],
            ty: Expr::FuncType(FuncType {
                func: Pos::NONE,
                params,
                results,
            }),
            tag: None,
        })
        .or(type_name.clone().map(|ty| Field {
            names: vec![],
            ty,
            tag: None,
        }));

    let interface_type = kw("interface")
        .then(tok_nl("{"))
        .then(
            method_spec
                .separated_by(sep())
                .allow_trailing()
                .collect::<Vec<_>>(),
        )
        .then(tok("}"))
        .map(|(((interface_pos, opening), list), closing)| {
            Expr::InterfaceType(InterfaceType {
                interface_pos,
                methods: FieldList {
                    opening,
                    list,
                    closing,
                },
            })
        })
        .boxed();

    let func_type = kw("func")
        .then(signature.clone())
        .map(|(func, (params, results))| FuncType {
            func,
            params,
            results,
        })
        .boxed();

    let paren_type = tok("(")
        .then(ty.clone())
        .then(tok(")"))
        .map(|((lparen, x), rparen)| {
            Expr::Paren(ParenExpr {
                lparen,
                x: Box::new(x),
                rparen,
            })
        });

    ty.define(
        choice((
            type_name,
            pointer_type,
            array_type.clone(),
            map_type.clone(),
            chan_type.clone(),
            struct_type.clone(),
            interface_type.clone(),
            func_type.clone().map(Expr::FuncType),
            paren_type,
        ))
        .labelled("type")
        .boxed(),
    );

    // Expressions

    // Element = Expr | LiteralValue
    let element = choice((
        lit_value.clone().map(|(lbrace, elts, rbrace)| {
            Expr::CompositeLit(CompositeLit {
                ty: None,
                lbrace,
                elts,
                rbrace,
            })
        }),
        expr.clone(),
    ));

    // KeyedElement = ( Element : )? Element
    let keyed_element = element
        .clone()
        .then(tok_nl(":").then(element).or_not())
        .map(|(key, value)| match value {
            Some((colon, value)) => Expr::KeyValue(KeyValueExpr {
                key: Box::new(key),
                colon,
                value: Box::new(value),
            }),
            None => key,
        });

    // LiteralValue = { ( KeyedElement , )* }
    lit_value.define(
        tok_nl("{")
            .then(
                keyed_element
                    .separated_by(tok_nl(","))
                    .allow_trailing()
                    .collect::<Vec<_>>(),
            )
            .then_ignore(nl_ws())
            .then(tok("}"))
            .map(|((lbrace, elts), rbrace)| (lbrace, elts, rbrace))
            .labelled("literal value")
            .boxed(),
    );

    let func_lit = func_type
        .then(block.clone().or_not())
        .map(|(ty, body)| match body {
            Some(body) => Expr::FuncLit(FuncLit { ty, body }),
            None => Expr::FuncType(ty),
        });

    // Explicit literal types may open a literal value anywhere, even in statement headers.
    // Without one they are conversions or arguments of `make` and `new`.
    let literal_type = choice((array_type, map_type, struct_type))
        .then(lit_value.clone().or_not())
        .map(|(ty, value)| match value {
            Some((lbrace, elts, rbrace)) => Expr::CompositeLit(CompositeLit {
                ty: Some(Box::new(ty)),
                lbrace,
                elts,
                rbrace,
            }),
            None => ty,
        });

    // Operand = Literal | FunctionLit | CompositeLit | Ident | ( Expr ) | Type
    let operand = choice((
        basic_lit().map(Expr::BasicLit),
        func_lit,
        literal_type,
        chan_type,
        interface_type,
        ident().map(Expr::Ident),
        tok_nl("(")
            .then(expr.clone())
            .then_ignore(nl_ws())
            .then(tok(")"))
            .map(|((lparen, x), rparen)| {
                Expr::Paren(ParenExpr {
                    lparen,
                    x: Box::new(x),
                    rparen,
                })
            }),
    ))
    .boxed();

    let args = expr.clone().separated_by(tok_nl(",")).collect::<Vec<_>>();

    // Selectors, index and calls are left-recursive: parse the operand first and fold the rest
    let postfix = choice((
        tok_nl(".")
            .ignore_then(tok("("))
            .then(kw("type").to(None).or(ty.clone().map(Some)))
            .then(tok(")"))
            .map(|((lparen, ty), rparen)| Postfix::TypeAssert { lparen, ty, rparen }),
        tok_nl(".").ignore_then(ident()).map(Postfix::Selector),
        tok_nl("[")
            .then(expr.clone().or_not())
            .then(tok_nl(":").ignore_then(expr.clone().or_not()))
            .then(tok_nl(":").ignore_then(expr.clone()).or_not())
            .then(tok("]"))
            .map(|((((lbrack, low), high), max), rbrack)| Postfix::Slice {
                lbrack,
                low,
                high,
                max,
                rbrack,
            }),
        tok_nl("[")
            .then(expr.clone())
            .then(tok("]"))
            .map(|((lbrack, index), rbrack)| Postfix::Index {
                lbrack,
                index,
                rbrack,
            }),
        tok_nl("(")
            .then(args)
            .then(tok_nl("...").or_not())
            .then_ignore(tok_nl(",").or_not())
            .then_ignore(nl_ws())
            .then(tok(")"))
            .map(|(((lparen, args), ellipsis), rparen)| Postfix::Call {
                lparen,
                args,
                ellipsis: ellipsis.unwrap_or(Pos::NONE),
                rparen,
            }),
    ))
    .boxed();

    // `T{...}` after a type name
    let composite = lit_value.map(|(lbrace, elts, rbrace)| Postfix::Composite {
        lbrace,
        elts,
        rbrace,
    });

    let primary = operand
        .clone()
        .foldl(postfix.clone().or(composite).repeated(), |x, postfix| {
            postfix.apply(x)
        })
        .boxed();

    // In if, for and switch headers `T {` starts the block, not a literal value
    let header_primary = operand
        .foldl(postfix.repeated(), |x, postfix| postfix.apply(x))
        .boxed();

    expr.define(binary_expr(unary_expr(primary)).labelled("expression"));
    let header_expr = binary_expr(unary_expr(header_primary));

    let expr_list = expr
        .clone()
        .separated_by(tok_nl(","))
        .at_least(1)
        .collect::<Vec<_>>();

    // Declarations

    // ValueSpec = Ident ( , Ident )* Type? ( = ExprList )?
    let value_spec = ident()
        .separated_by(tok_nl(","))
        .at_least(1)
        .collect::<Vec<_>>()
        .then(ty.clone().or_not())
        .then(tok_nl("=").ignore_then(expr_list.clone()).or_not())
        .map(|((names, ty), values)| {
            Spec::Value(ValueSpec {
                names,
                ty,
                values: values.unwrap_or_default(),
            })
        });

    // TypeSpec = Ident =? Type
    let type_spec = ident()
        .then(tok("=").or_not())
        .then(ty.clone())
        .map(|((name, assign), ty)| {
            Spec::Type(TypeSpec {
                name,
                assign: assign.unwrap_or(Pos::NONE),
                ty,
            })
        });

    let gen_decl = choice((
        kw("var")
            .then(spec_group(value_spec.clone()))
            .map(build_gen_decl(DeclTok::Var)),
        kw("const")
            .then(spec_group(value_spec))
            .map(build_gen_decl(DeclTok::Const)),
        kw("type")
            .then(spec_group(type_spec))
            .map(build_gen_decl(DeclTok::Type)),
    ))
    .labelled("declaration")
    .boxed();

    // Statements

    let simple = simple_stmt(expr.clone());
    let header_simple = simple_stmt(header_expr.clone());

    let return_stmt = kw("return")
        .then(expr_list.clone().or_not())
        .map(|(return_pos, results)| {
            Stmt::Return(ReturnStmt {
                return_pos,
                results: results.unwrap_or_default(),
            })
        });

    let branch_stmt = choice((
        kw("break").map(|pos| (pos, BranchTok::Break)),
        kw("continue").map(|pos| (pos, BranchTok::Continue)),
        kw("goto").map(|pos| (pos, BranchTok::Goto)),
        kw("fallthrough").map(|pos| (pos, BranchTok::Fallthrough)),
    ))
    .then(ident().or_not())
    .map(|((tok_pos, tok), label)| {
        Stmt::Branch(BranchStmt {
            tok_pos,
            tok,
            label,
        })
    });

    // LabeledStmt = Ident : Statement
    let labeled_stmt = ident()
        .then(
            just(':')
                .then(just('=').or_not())
                .filter(|(_, assign)| assign.is_none())
                .map_with(|_, e| { let span: Span = e.span(); Pos::from(span) }),
        )
        .then_ignore(nl_ws())
        .then(stmt.clone())
        .map(|((label, colon), stmt)| {
            Stmt::Labeled(LabeledStmt {
                label,
                colon,
                stmt: Box::new(stmt),
            })
        });

    // If = if ( SimpleStmt ; )? Expr Block ( else ( If | Block ) )?
    let if_stmt = recursive(|if_stmt| {
        kw("if")
            .then(header_simple.clone().then_ignore(tok(";")).or_not())
            .then(header_expr.clone())
            .then(block.clone())
            .then(
                kw("else")
                    .ignore_then(choice((if_stmt, block.clone().map(Stmt::Block))))
                    .or_not()
                    .labelled("else branch"),
            )
            .map(|((((if_pos, init), cond), body), r#else)| {
                Stmt::If(IfStmt {
                    if_pos,
                    init: init.map(Box::new),
                    cond,
                    body,
                    r#else: r#else.map(Box::new),
                })
            })
            .boxed()
    });

    let case_body = stmt
        .clone()
        .separated_by(sep())
        .allow_trailing()
        .collect::<Vec<_>>();

    // CaseClause = ( case ExprList | default ) : StatementList
    let case_clause = choice((
        kw("case").then(expr_list.clone()),
        kw("default").map(|pos| (pos, vec![])),
    ))
    .then(tok(":"))
    .then_ignore(nl_ws())
    .then(case_body.clone())
    .map(|(((case_pos, list), colon), body)| {
        Stmt::Case(CaseClause {
            case_pos,
            list,
            colon,
            body,
        })
    });

    // Switch = switch ( SimpleStmt ; )? ( Expr | TypeSwitchGuard )? { CaseClause* }
    let switch_stmt = kw("switch")
        .then(header_simple.clone().then_ignore(tok(";")).or_not())
        .then(
            header_simple
                .clone()
                .filter(|tag| matches!(tag, Stmt::Expr(_)) || is_type_guard(tag))
                .or_not(),
        )
        .then(tok_nl("{"))
        .then(case_clause.repeated().collect::<Vec<_>>())
        .then(tok("}"))
        .map(|(((((switch_pos, init), tag), lbrace), list), rbrace)| {
            let init = init.map(Box::new);
            let body = BlockStmt {
                lbrace,
                list,
                rbrace,
            };
            match tag {
                Some(tag) if is_type_guard(&tag) => Stmt::TypeSwitch(TypeSwitchStmt {
                    switch_pos,
                    init,
                    assign: Box::new(tag),
                    body,
                }),
                Some(Stmt::Expr(tag)) => Stmt::Switch(SwitchStmt {
                    switch_pos,
                    init,
                    tag: Some(tag.x),
                    body,
                }),
                _ => Stmt::Switch(SwitchStmt {
                    switch_pos,
                    init,
                    tag: None,
                    body,
                }),
            }
        })
        .boxed();

    // CommClause = ( case ( SendStmt | RecvStmt ) | default ) : StatementList
    let comm_clause = choice((
        kw("case").then(simple.clone().map(Some)),
        kw("default").map(|pos| (pos, None)),
    ))
    .then(tok(":"))
    .then_ignore(nl_ws())
    .then(case_body)
    .map(|(((case_pos, comm), colon), body)| {
        Stmt::Comm(CommClause {
            case_pos,
            comm: comm.map(Box::new),
            colon,
            body,
        })
    });

    let select_stmt = kw("select")
        .then(tok_nl("{"))
        .then(comm_clause.repeated().collect::<Vec<_>>())
        .then(tok("}"))
        .map(|(((select_pos, lbrace), list), rbrace)| {
            Stmt::Select(SelectStmt {
                select_pos,
                body: BlockStmt {
                    lbrace,
                    list,
                    rbrace,
                },
            })
        })
        .boxed();

    let range_tok = choice((
        just(":=").to(AssignTok::Define),
        just("=").to(AssignTok::Assign),
    ))
    .map_with(|tok, e| { let span: Span = e.span(); (Pos::from(span), tok) })
    .then_ignore(ws());

    // RangeClause = ( Expr ( , Expr )? ( := | = ) )? range Expr
    let range_clause = header_expr
        .clone()
        .then(tok(",").ignore_then(header_expr.clone()).or_not())
        .then(range_tok)
        .or_not()
        .then_ignore(kw("range"))
        .then(header_expr.clone())
        .map(|(lhs, x)| match lhs {
            Some((key, tok)) => Clause::Range {
                key: Some(key),
                tok: Some(tok),
                x,
            },
            None => Clause::Range {
                key: None,
                tok: None,
                x,
            },
        });

    // ForClause = SimpleStmt? ; Expr? ; SimpleStmt?
    let for_clause = header_simple
        .clone()
        .or_not()
        .then_ignore(tok(";"))
        .then(header_expr.clone().or_not())
        .then_ignore(tok(";"))
        .then(header_simple.or_not())
        .map(|((init, cond), post)| Clause::Three { init, cond, post });

    let for_stmt = kw("for")
        .then(choice((range_clause, for_clause, header_expr.map(Clause::Cond))).or_not())
        .then(block.clone())
        .map(|((for_pos, clause), body)| match clause {
            Some(Clause::Range { key, tok, x }) => {
                let (key, value) = match key {
                    Some((key, value)) => (Some(key), value),
                    None => (None, None),
                };
                let (tok_pos, tok) = match tok {
                    Some((pos, tok)) => (pos, Some(tok)),
                    None => (Pos::NONE, None),
                };
                Stmt::Range(RangeStmt {
                    for_pos,
                    key,
                    value,
                    tok_pos,
                    tok,
                    x,
                    body,
                })
            }
            Some(Clause::Three { init, cond, post }) => Stmt::For(ForStmt {
                for_pos,
                init: init.map(Box::new),
                cond,
                post: post.map(Box::new),
                body,
            }),
            Some(Clause::Cond(cond)) => Stmt::For(ForStmt {
                for_pos,
                init: None,
                cond: Some(cond),
                post: None,
                body,
            }),
            None => Stmt::For(ForStmt {
                for_pos,
                init: None,
                cond: None,
                post: None,
                body,
            }),
        })
        .boxed();

    let go_stmt = kw("go")
        .then(expr.clone())
        .map(|(go_pos, call)| Stmt::Go(GoStmt { go_pos, call }));

    let defer_stmt = kw("defer")
        .then(expr.clone())
        .map(|(defer_pos, call)| Stmt::Defer(DeferStmt { defer_pos, call }));

    stmt.define(
        choice((
            gen_decl.clone().map(Stmt::Decl),
            return_stmt,
            branch_stmt,
            if_stmt,
            switch_stmt,
            select_stmt,
            for_stmt,
            go_stmt,
            defer_stmt,
            block.clone().map(Stmt::Block),
            labeled_stmt,
            simple,
        ))
        .labelled("statement")
        .boxed(),
    );

    // Functions

    // FuncDecl = func Receiver? Ident Signature Block?
    let func_decl = kw("func")
        .then(params.or_not())
        .then(ident())
        .then(signature)
        .then(block.or_not())
        .map(|((((func, recv), name), (params, results)), body)| FuncDecl {
            func,
            recv,
            name,
            params,
            results,
            body,
        })
        .labelled("function declaration");

    choice((func_decl.map(Decl::Func), gen_decl.map(Decl::Gen))).boxed()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{
        ast::{ChanDir, Decl, DeclTok, Expr, LitKind, Spec, Stmt},
        parse_file, print, report_errors, SourceMap,
    };

    fn body_of<'a>(decl: &'a Decl<'a>) -> &'a [Stmt<'a>] {
        match decl {
            Decl::Func(f) => &f.body.as_ref().unwrap().list,
            Decl::Gen(_) => panic!("expected func"),
        }
    }

    #[test]
    fn test_package_clause() {
        let file = parse_file("package main\n").unwrap();
        assert_eq!(file.name.name, "main");
        assert!(file.imports.is_empty());
        assert!(file.decls.is_empty());

        let file = parse_file("// Package doc\npackage foo").unwrap();
        assert_eq!(file.name.name, "foo");
    }

    #[test]
    fn test_imports() {
        let src = r#"package main

import (
	"fmt"
	str "strings"
)
import _ "embed"
"#;
        let file = parse_file(src).unwrap();
        let paths: Vec<_> = file
            .imports
            .iter()
            .map(|spec| match &spec.path {
                Expr::BasicLit(lit) => lit.value,
                _ => panic!("expected literal"),
            })
            .collect();
        assert_eq!(paths, vec![r#""fmt""#, r#""strings""#, r#""embed""#]);

        let names: Vec<_> = file
            .imports
            .iter()
            .map(|spec| spec.name.as_ref().map(|n| n.name))
            .collect();
        assert_eq!(names, vec![None, Some("str"), Some("_")]);
    }

    #[test]
    fn test_functions() {
        let src = r#"package main

func inc(val int) int {
	return val + 1
}

func pair(a, b int, s string) (int, error) { return a, nil }

func forwardDeclared() bool

func noop() {}
"#;
        let file = parse_file(src).unwrap();
        assert_eq!(file.decls.len(), 4);

        let Decl::Func(inc) = &file.decls[0] else {
            panic!("expected func");
        };
        assert_eq!(inc.name.name, "inc");
        assert_eq!(inc.params.list.len(), 1);
        assert_eq!(inc.results.as_ref().unwrap().list.len(), 1);
        assert_eq!(
            print::stmt(&body_of(&file.decls[0])[0], &SourceMap::new("", src)),
            "return val + 1"
        );

        let Decl::Func(pair) = &file.decls[1] else {
            panic!("expected func");
        };
        let names: Vec<Vec<_>> = pair
            .params
            .list
            .iter()
            .map(|f| f.names.iter().map(|n| n.name).collect())
            .collect();
        assert_eq!(names, vec![vec!["a", "b"], vec!["s"]]);
        assert_eq!(pair.results.as_ref().unwrap().list.len(), 2);

        let Decl::Func(forward) = &file.decls[2] else {
            panic!("expected func");
        };
        assert!(forward.body.is_none());

        assert!(body_of(&file.decls[3]).is_empty());
    }

    #[test]
    fn test_statements() {
        let src = r#"package main

func main() {
	line := "Hello World!" // greeting
	fmt.Fprintln(io.Discard,
		line,
	)
	/* counters */
	x, y := 1, 2; x++
	y -= x
	if v := x * 2; v > y {
		return
	} else if x == 0 {
		y = 0
	} else {
		y <<= 1
	}
	for i := 0; i < 10; i++ {
		continue
	}
	for k, v := range m {
		defer f(k, v)
	}
	for {
		break
	}
	var a, b int = 1, 2
	go run()
}
"#;
        let files = SourceMap::new("", src);
        let file = parse_file(src).unwrap();
        let lines: Vec<_> = body_of(&file.decls[0])
            .iter()
            .map(|s| print::stmt(s, &files))
            .collect();

        assert_eq!(
            lines,
            vec![
                r#"line := "Hello World!""#,
                "fmt.Fprintln(io.Discard,\n\tline,\n)",
                "x, y := 1, 2",
                "x++",
                "y -= x",
                "if v := x * 2; v > y {\n\treturn\n} else if x == 0 {\n\ty = 0\n} else {\n\ty <<= 1\n}",
                "for i := 0; i < 10; i++ {\n\tcontinue\n}",
                "for k, v := range m {\n\tdefer f(k, v)\n}",
                "for {\n\tbreak\n}",
                "var a, b int = 1, 2",
                "go run()",
            ]
        );
    }

    #[test]
    fn test_expressions() {
        let src = r#"package p

func f() {
	return a + b*c - d, -x, *p, !ok && (y || z), s[i+1], a.b.c(1)[0], x &^ y, a<<2 | 1
}
"#;
        let file = parse_file(src).unwrap();
        let Stmt::Return(ret) = &body_of(&file.decls[0])[0] else {
            panic!("expected return");
        };
        let files = SourceMap::new("", src);
        let printed: Vec<_> = ret.results.iter().map(|e| print::expr(e, &files)).collect();
        assert_eq!(
            printed,
            vec![
                "a + b*c - d",
                "-x",
                "*p",
                "!ok && (y || z)",
                "s[i+1]",
                "a.b.c(1)[0]",
                "x &^ y",
                "a<<2 | 1",
            ]
        );
    }

    #[test]
    fn test_literals() {
        let src = r#"package p

func f() {
	return 42, 0x1F, 9.99, 1e3, 2i, 'a', "str\"", `raw
string`
}
"#;
        let file = parse_file(src).unwrap();
        let Stmt::Return(ret) = &body_of(&file.decls[0])[0] else {
            panic!("expected return");
        };
        let lits: Vec<_> = ret
            .results
            .iter()
            .map(|e| match e {
                Expr::BasicLit(lit) => (lit.kind, lit.value),
                _ => panic!("expected literal"),
            })
            .collect();
        assert_eq!(
            lits,
            vec![
                (LitKind::Int, "42"),
                (LitKind::Int, "0x1F"),
                (LitKind::Float, "9.99"),
                (LitKind::Float, "1e3"),
                (LitKind::Imag, "2i"),
                (LitKind::Char, "'a'"),
                (LitKind::String, r#""str\"""#),
                (LitKind::String, "`raw\nstring`"),
            ]
        );
    }

    #[test]
    fn test_declarations() {
        let src = r#"package p

const limit = 10

var (
	a int
	b, c = 1, 2
)

type Point struct {
	X, Y int
	label string
}

type Alias = map[string][]*Point
"#;
        let file = parse_file(src).unwrap();
        let toks: Vec<_> = file
            .decls
            .iter()
            .map(|decl| match decl {
                Decl::Gen(g) => (g.tok, g.specs.len(), g.lparen.is_valid()),
                Decl::Func(_) => panic!("expected declaration"),
            })
            .collect();
        assert_eq!(
            toks,
            vec![
                (DeclTok::Const, 1, false),
                (DeclTok::Var, 2, true),
                (DeclTok::Type, 1, false),
                (DeclTok::Type, 1, false),
            ]
        );

        let Decl::Gen(alias) = &file.decls[3] else {
            panic!("expected declaration");
        };
        let Spec::Type(spec) = &alias.specs[0] else {
            panic!("expected type spec");
        };
        assert!(spec.assign.is_valid());
        assert_eq!(
            print::expr(&spec.ty, &SourceMap::new("", src)),
            "map[string][]*Point"
        );
    }

    #[test]
    fn test_switch_and_select() {
        let src = r#"package main

func main() {
	switch x := f(); x {
	case 1, 2:
		y++
	default:
	}
	switch v := i.(type) {
	case int:
		return v
	}
	switch {
	case a > b:
		fallthrough
	}
	select {
	case ch <- 1:
	case v, ok := <-done:
		use(v, ok)
	default:
		return
	}
outer:
	for {
		break outer
	}
}
"#;
        let files = SourceMap::new("", src);
        let file = parse_file(src).unwrap();
        let body = body_of(&file.decls[0]);
        assert!(matches!(body[0], Stmt::Switch(_)));
        assert!(matches!(body[1], Stmt::TypeSwitch(_)));
        assert!(matches!(body[3], Stmt::Select(_)));
        assert!(matches!(body[4], Stmt::Labeled(_)));

        let lines: Vec<_> = body.iter().map(|s| print::stmt(s, &files)).collect();
        assert_eq!(
            lines,
            vec![
                "switch x := f(); x {\ncase 1, 2:\n\ty++\ndefault:\n}",
                "switch v := i.(type) {\ncase int:\n\treturn v\n}",
                "switch {\ncase a > b:\n\tfallthrough\n}",
                "select {\ncase ch <- 1:\ncase v, ok := <-done:\n\tuse(v, ok)\ndefault:\n\treturn\n}",
                "outer:\nfor {\n\tbreak outer\n}",
            ]
        );
    }

    #[test]
    fn test_literal_expressions() {
        let src = r#"package main

func main() {
	p := Point{X: 1, Y: 2}
	xs := []int{1, 2, 3}
	m := map[string][]int{"a": {1}, "b": nil}
	t := s[1:len(s)-1]
	u := s[:n]
	v, ok := x.(fmt.Stringer)
	total := sum(xs...)
	ch <- v
	var c chan<- int
	var r <-chan int
	var e interface{}
	if p == (Point{}) {
		return
	}
}
"#;
        let files = SourceMap::new("", src);
        let file = parse_file(src).unwrap();
        let body = body_of(&file.decls[0]);
        assert!(matches!(body[7], Stmt::Send(_)));

        let lines: Vec<_> = body.iter().map(|s| print::stmt(s, &files)).collect();
        assert_eq!(
            lines,
            vec![
                "p := Point{X: 1, Y: 2}",
                "xs := []int{1, 2, 3}",
                r#"m := map[string][]int{"a": {1}, "b": nil}"#,
                "t := s[1 : len(s)-1]",
                "u := s[:n]",
                "v, ok := x.(fmt.Stringer)",
                "total := sum(xs...)",
                "ch <- v",
                "var c chan<- int",
                "var r <-chan int",
                "var e interface{}",
                "if p == (Point{}) {\n\treturn\n}",
            ]
        );

        let Stmt::Decl(decl) = &body[9] else {
            panic!("expected declaration");
        };
        let Spec::Value(spec) = &decl.specs[0] else {
            panic!("expected value spec");
        };
        assert!(matches!(
            spec.ty,
            Some(Expr::ChanType(ref chan)) if chan.dir == ChanDir::Recv
        ));
    }

    #[test]
    fn test_methods() {
        let src = r#"package main

func (u *User) Rename(names ...string) {}

func sum(xs ...int) (total int) { return }
"#;
        let file = parse_file(src).unwrap();

        let Decl::Func(rename) = &file.decls[0] else {
            panic!("expected func");
        };
        assert_eq!(rename.name.name, "Rename");
        let recv = rename.recv.as_ref().unwrap();
        assert_eq!(recv.list.len(), 1);
        assert_eq!(recv.list[0].names[0].name, "u");
        assert!(matches!(recv.list[0].ty, Expr::Star(_)));
        assert!(matches!(rename.params.list[0].ty, Expr::Ellipsis(_)));

        let Decl::Func(sum) = &file.decls[1] else {
            panic!("expected func");
        };
        assert!(sum.recv.is_none());
        assert_eq!(sum.results.as_ref().unwrap().list[0].names[0].name, "total");
    }

    #[test]
    fn test_numbers_and_unicode() {
        let src = r#"package p

func f() {
	return π, 0x1p-2, 0X1.8P3, 0xE, 1_000, 0b101
}
"#;
        let file = parse_file(src).unwrap();
        let Stmt::Return(ret) = &body_of(&file.decls[0])[0] else {
            panic!("expected return");
        };
        assert!(matches!(&ret.results[0], Expr::Ident(id) if id.name == "π"));

        let lits: Vec<_> = ret.results[1..]
            .iter()
            .map(|e| match e {
                Expr::BasicLit(lit) => (lit.kind, lit.value),
                _ => panic!("expected literal"),
            })
            .collect();
        assert_eq!(
            lits,
            vec![
                (LitKind::Float, "0x1p-2"),
                (LitKind::Float, "0X1.8P3"),
                (LitKind::Int, "0xE"),
                (LitKind::Int, "1_000"),
                (LitKind::Int, "0b101"),
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        let src = "package main\n99bottles";
        let errs = parse_file(src).unwrap_err();
        assert!(!errs.is_empty());
        // The failure points at the start of the second line
        assert_eq!(errs[0].span().start, 13);

        let report = report_errors(src, &errs).unwrap();
        assert!(report.contains("Error"));
    }
}
