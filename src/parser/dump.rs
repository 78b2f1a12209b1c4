//! Structural text dump of source trees.
//!
//! Every node describes itself through [`Dump`]: its variant name and its
//! fields, each tagged with a [`Role`]. A [`Filter`] then decides which
//! fields are printed. The output is numbered line by line:
//!
//! ```text
//!      0  ReturnStmt {
//!      1  .  return_pos: 5:3
//!      2  }
//! ```

use super::ast::{
    ArrayType, AssignStmt, BasicLit, BinaryExpr, BlockStmt, BranchStmt, CallExpr, CaseClause,
    ChanType, CommClause, CompositeLit, Decl, DeferStmt, Ellipsis, Expr, ExprStmt, Field,
    FieldList, File, ForStmt, FuncDecl, FuncLit, FuncType, GenDecl, GoStmt, Ident, IfStmt,
    ImportSpec, IncDecStmt, IndexExpr, InterfaceType, KeyValueExpr, LabeledStmt, MapType, Object,
    ParenExpr, Pos, RangeStmt, ReturnStmt, SelectStmt, SelectorExpr, SendStmt, SliceExpr, Spec,
    StarExpr, Stmt, StructType, SwitchStmt, TypeAssertExpr, TypeSpec, TypeSwitchStmt, UnaryExpr,
    ValueSpec,
};
use super::pos::SourceMap;

/// What a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Token offsets
    Position,
    /// Data computed after parsing, e.g. identifier resolution
    Metadata,
    /// Everything that makes up the syntax
    Value,
}

/// Field selection policy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Print every field, absent ones as `nil`
    All,
    /// Skip absent fields and empty lists
    #[default]
    NotEmpty,
    /// Like `NotEmpty`, and also skip positions
    Compact,
}

impl Filter {
    pub fn keep(self, role: Role, empty: bool) -> bool {
        match self {
            Filter::All => true,
            Filter::NotEmpty => !empty,
            Filter::Compact => !empty && role != Role::Position,
        }
    }
}

pub enum Value<'v> {
    Pos(Pos),
    /// Printed quoted
    Text(&'v str),
    /// Printed as is
    Token(&'v str),
    Node(&'v dyn Dump),
    Nodes(Vec<&'v dyn Dump>),
    Absent,
}

impl Value<'_> {
    fn is_empty(&self) -> bool {
        match self {
            Value::Nodes(nodes) => nodes.is_empty(),
            Value::Absent => true,
            _ => false,
        }
    }
}

fn node<'v>(node: &'v impl Dump) -> Value<'v> {
    Value::Node(node)
}

fn boxed<'v, T: Dump>(node: &'v Option<Box<T>>) -> Value<'v> {
    match node {
        Some(node) => Value::Node(node.as_ref()),
        None => Value::Absent,
    }
}

fn opt<'v>(node: &'v Option<impl Dump>) -> Value<'v> {
    match node {
        Some(node) => Value::Node(node),
        None => Value::Absent,
    }
}

fn nodes<'v>(items: &'v [impl Dump]) -> Value<'v> {
    Value::Nodes(items.iter().map(|item| item as &dyn Dump).collect())
}

pub trait Dump {
    fn dump(&self, d: &mut Dumper<'_>);
}

pub struct Dumper<'a> {
    files: &'a SourceMap,
    filter: Filter,
    out: String,
    line: usize,
    level: usize,
    /// Field name or list index of the next node header
    label: Option<String>,
}

impl<'a> Dumper<'a> {
    pub fn new(files: &'a SourceMap, filter: Filter) -> Self {
        Self {
            files,
            filter,
            out: String::new(),
            line: 0,
            level: 0,
            label: None,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn write_line(&mut self, text: &str) {
        self.out.push_str(&format!("{:6}  ", self.line));
        self.out.push_str(&".  ".repeat(self.level));
        self.out.push_str(text);
        self.out.push('\n');
        self.line += 1;
    }

    /// Write a node header, its fields and the closing brace.
    pub fn node(&mut self, name: &str, fields: impl FnOnce(&mut Self)) {
        let label = self.label.take().unwrap_or_default();
        self.write_line(&format!("{label}{name} {{"));
        self.level += 1;
        fields(self);
        self.level -= 1;
        self.write_line("}");
    }

    pub fn field(&mut self, name: &str, role: Role, value: Value<'_>) {
        if !self.filter.keep(role, value.is_empty()) {
            return;
        }

        match value {
            Value::Pos(pos) => {
                let position = self.files.position(pos).to_string();
                self.write_line(&format!("{name}: {position}"));
            }
            Value::Text(text) => self.write_line(&format!("{name}: {text:?}")),
            Value::Token(token) => self.write_line(&format!("{name}: {token}")),
            Value::Node(node) => {
                self.label = Some(format!("{name}: "));
                node.dump(self);
            }
            Value::Nodes(nodes) => {
                self.write_line(&format!("{name}: [] (len = {}) {{", nodes.len()));
                self.level += 1;
                for (i, node) in nodes.into_iter().enumerate() {
                    self.label = Some(format!("{i}: "));
                    node.dump(self);
                }
                self.level -= 1;
                self.write_line("}");
            }
            Value::Absent => self.write_line(&format!("{name}: nil")),
        }
    }
}

/// Render a node and everything below it.
pub fn render(files: &SourceMap, root: &dyn Dump, filter: Filter) -> String {
    let mut d = Dumper::new(files, filter);
    root.dump(&mut d);
    d.finish()
}

impl Dump for File<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("File", |d| {
            d.field("package", Role::Position, Value::Pos(self.package));
            d.field("name", Role::Value, node(&self.name));
            d.field("imports", Role::Value, nodes(&self.imports));
            d.field("decls", Role::Value, nodes(&self.decls));
        });
    }
}

impl Dump for ImportSpec<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("ImportSpec", |d| {
            d.field("name", Role::Value, opt(&self.name));
            d.field("path", Role::Value, node(&self.path));
        });
    }
}

impl Dump for Decl<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        match self {
            Decl::Func(f) => f.dump(d),
            Decl::Gen(g) => g.dump(d),
        }
    }
}

impl Dump for FuncDecl<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("FuncDecl", |d| {
            d.field("func", Role::Position, Value::Pos(self.func));
            d.field("recv", Role::Value, opt(&self.recv));
            d.field("name", Role::Value, node(&self.name));
            d.field("params", Role::Value, node(&self.params));
            d.field("results", Role::Value, opt(&self.results));
            d.field("body", Role::Value, opt(&self.body));
        });
    }
}

impl Dump for FieldList<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("FieldList", |d| {
            d.field("opening", Role::Position, Value::Pos(self.opening));
            d.field("list", Role::Value, nodes(&self.list));
            d.field("closing", Role::Position, Value::Pos(self.closing));
        });
    }
}

impl Dump for Field<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("Field", |d| {
            d.field("names", Role::Value, nodes(&self.names));
            d.field("ty", Role::Value, node(&self.ty));
            d.field("tag", Role::Value, opt(&self.tag));
        });
    }
}

impl Dump for GenDecl<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("GenDecl", |d| {
            d.field("tok_pos", Role::Position, Value::Pos(self.tok_pos));
            d.field("tok", Role::Value, Value::Token(self.tok.as_str()));
            d.field("lparen", Role::Position, Value::Pos(self.lparen));
            d.field("specs", Role::Value, nodes(&self.specs));
            d.field("rparen", Role::Position, Value::Pos(self.rparen));
        });
    }
}

impl Dump for Spec<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        match self {
            Spec::Value(s) => s.dump(d),
            Spec::Type(s) => s.dump(d),
        }
    }
}

impl Dump for ValueSpec<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("ValueSpec", |d| {
            d.field("names", Role::Value, nodes(&self.names));
            d.field("ty", Role::Value, opt(&self.ty));
            d.field("values", Role::Value, nodes(&self.values));
        });
    }
}

impl Dump for TypeSpec<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("TypeSpec", |d| {
            d.field("name", Role::Value, node(&self.name));
            d.field("assign", Role::Position, Value::Pos(self.assign));
            d.field("ty", Role::Value, node(&self.ty));
        });
    }
}

impl Dump for Stmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        match self {
            Stmt::Decl(s) => d.node("DeclStmt", |d| d.field("decl", Role::Value, node(s))),
            Stmt::Expr(s) => s.dump(d),
            Stmt::Assign(s) => s.dump(d),
            Stmt::IncDec(s) => s.dump(d),
            Stmt::Return(s) => s.dump(d),
            Stmt::Branch(s) => s.dump(d),
            Stmt::Block(s) => s.dump(d),
            Stmt::If(s) => s.dump(d),
            Stmt::For(s) => s.dump(d),
            Stmt::Range(s) => s.dump(d),
            Stmt::Go(s) => s.dump(d),
            Stmt::Defer(s) => s.dump(d),
            Stmt::Labeled(s) => s.dump(d),
            Stmt::Send(s) => s.dump(d),
            Stmt::Switch(s) => s.dump(d),
            Stmt::TypeSwitch(s) => s.dump(d),
            Stmt::Select(s) => s.dump(d),
            Stmt::Case(s) => s.dump(d),
            Stmt::Comm(s) => s.dump(d),
        }
    }
}

impl Dump for ExprStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("ExprStmt", |d| d.field("x", Role::Value, node(&self.x)));
    }
}

impl Dump for AssignStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("AssignStmt", |d| {
            d.field("lhs", Role::Value, nodes(&self.lhs));
            d.field("tok_pos", Role::Position, Value::Pos(self.tok_pos));
            d.field("tok", Role::Value, Value::Token(self.tok.as_str()));
            d.field("rhs", Role::Value, nodes(&self.rhs));
        });
    }
}

impl Dump for IncDecStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("IncDecStmt", |d| {
            d.field("x", Role::Value, node(&self.x));
            d.field("tok_pos", Role::Position, Value::Pos(self.tok_pos));
            d.field("tok", Role::Value, Value::Token(self.tok.as_str()));
        });
    }
}

impl Dump for ReturnStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("ReturnStmt", |d| {
            d.field("return_pos", Role::Position, Value::Pos(self.return_pos));
            d.field("results", Role::Value, nodes(&self.results));
        });
    }
}

impl Dump for BranchStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("BranchStmt", |d| {
            d.field("tok_pos", Role::Position, Value::Pos(self.tok_pos));
            d.field("tok", Role::Value, Value::Token(self.tok.as_str()));
            d.field("label", Role::Value, opt(&self.label));
        });
    }
}

impl Dump for BlockStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("BlockStmt", |d| {
            d.field("lbrace", Role::Position, Value::Pos(self.lbrace));
            d.field("list", Role::Value, nodes(&self.list));
            d.field("rbrace", Role::Position, Value::Pos(self.rbrace));
        });
    }
}

impl Dump for IfStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("IfStmt", |d| {
            d.field("if_pos", Role::Position, Value::Pos(self.if_pos));
            d.field("init", Role::Value, boxed(&self.init));
            d.field("cond", Role::Value, node(&self.cond));
            d.field("body", Role::Value, node(&self.body));
            d.field("else", Role::Value, boxed(&self.r#else));
        });
    }
}

impl Dump for ForStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("ForStmt", |d| {
            d.field("for_pos", Role::Position, Value::Pos(self.for_pos));
            d.field("init", Role::Value, boxed(&self.init));
            d.field("cond", Role::Value, opt(&self.cond));
            d.field("post", Role::Value, boxed(&self.post));
            d.field("body", Role::Value, node(&self.body));
        });
    }
}

impl Dump for RangeStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("RangeStmt", |d| {
            d.field("for_pos", Role::Position, Value::Pos(self.for_pos));
            d.field("key", Role::Value, opt(&self.key));
            d.field("value", Role::Value, opt(&self.value));
            d.field("tok_pos", Role::Position, Value::Pos(self.tok_pos));
            let tok = match self.tok {
                Some(tok) => Value::Token(tok.as_str()),
                None => Value::Absent,
            };
            d.field("tok", Role::Value, tok);
            d.field("x", Role::Value, node(&self.x));
            d.field("body", Role::Value, node(&self.body));
        });
    }
}

impl Dump for GoStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("GoStmt", |d| {
            d.field("go_pos", Role::Position, Value::Pos(self.go_pos));
            d.field("call", Role::Value, node(&self.call));
        });
    }
}

impl Dump for DeferStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("DeferStmt", |d| {
            d.field("defer_pos", Role::Position, Value::Pos(self.defer_pos));
            d.field("call", Role::Value, node(&self.call));
        });
    }
}

impl Dump for LabeledStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("LabeledStmt", |d| {
            d.field("label", Role::Value, node(&self.label));
            d.field("colon", Role::Position, Value::Pos(self.colon));
            d.field("stmt", Role::Value, node(self.stmt.as_ref()));
        });
    }
}

impl Dump for SendStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("SendStmt", |d| {
            d.field("chan", Role::Value, node(&self.chan));
            d.field("arrow", Role::Position, Value::Pos(self.arrow));
            d.field("value", Role::Value, node(&self.value));
        });
    }
}

impl Dump for SwitchStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("SwitchStmt", |d| {
            d.field("switch_pos", Role::Position, Value::Pos(self.switch_pos));
            d.field("init", Role::Value, boxed(&self.init));
            d.field("tag", Role::Value, opt(&self.tag));
            d.field("body", Role::Value, node(&self.body));
        });
    }
}

impl Dump for TypeSwitchStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("TypeSwitchStmt", |d| {
            d.field("switch_pos", Role::Position, Value::Pos(self.switch_pos));
            d.field("init", Role::Value, boxed(&self.init));
            d.field("assign", Role::Value, node(self.assign.as_ref()));
            d.field("body", Role::Value, node(&self.body));
        });
    }
}

impl Dump for SelectStmt<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("SelectStmt", |d| {
            d.field("select_pos", Role::Position, Value::Pos(self.select_pos));
            d.field("body", Role::Value, node(&self.body));
        });
    }
}

impl Dump for CaseClause<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("CaseClause", |d| {
            d.field("case", Role::Position, Value::Pos(self.case_pos));
            d.field("list", Role::Value, nodes(&self.list));
            d.field("colon", Role::Position, Value::Pos(self.colon));
            d.field("body", Role::Value, nodes(&self.body));
        });
    }
}

impl Dump for CommClause<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("CommClause", |d| {
            d.field("case", Role::Position, Value::Pos(self.case_pos));
            d.field("comm", Role::Value, boxed(&self.comm));
            d.field("colon", Role::Position, Value::Pos(self.colon));
            d.field("body", Role::Value, nodes(&self.body));
        });
    }
}

impl Dump for Expr<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        match self {
            Expr::Ident(e) => e.dump(d),
            Expr::BasicLit(e) => e.dump(d),
            Expr::Paren(e) => e.dump(d),
            Expr::Selector(e) => e.dump(d),
            Expr::Index(e) => e.dump(d),
            Expr::Call(e) => e.dump(d),
            Expr::Star(e) => e.dump(d),
            Expr::Unary(e) => e.dump(d),
            Expr::Binary(e) => e.dump(d),
            Expr::ArrayType(e) => e.dump(d),
            Expr::MapType(e) => e.dump(d),
            Expr::ChanType(e) => e.dump(d),
            Expr::StructType(e) => e.dump(d),
            Expr::CompositeLit(e) => e.dump(d),
            Expr::KeyValue(e) => e.dump(d),
            Expr::FuncLit(e) => e.dump(d),
            Expr::Slice(e) => e.dump(d),
            Expr::TypeAssert(e) => e.dump(d),
            Expr::Ellipsis(e) => e.dump(d),
            Expr::FuncType(e) => e.dump(d),
            Expr::InterfaceType(e) => e.dump(d),
        }
    }
}

impl Dump for Ident<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("Ident", |d| {
            d.field("name_pos", Role::Position, Value::Pos(self.name_pos));
            d.field("name", Role::Value, Value::Text(self.name));
            d.field("obj", Role::Metadata, opt(&self.obj));
        });
    }
}

impl Dump for Object<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("Object", |d| {
            d.field("kind", Role::Value, Value::Token(self.kind.as_str()));
            d.field("name", Role::Value, Value::Text(self.name));
        });
    }
}

impl Dump for BasicLit<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("BasicLit", |d| {
            d.field("value_pos", Role::Position, Value::Pos(self.value_pos));
            d.field("kind", Role::Value, Value::Token(self.kind.as_str()));
            d.field("value", Role::Value, Value::Text(self.value));
        });
    }
}

impl Dump for ParenExpr<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("ParenExpr", |d| {
            d.field("lparen", Role::Position, Value::Pos(self.lparen));
            d.field("x", Role::Value, node(self.x.as_ref()));
            d.field("rparen", Role::Position, Value::Pos(self.rparen));
        });
    }
}

impl Dump for SelectorExpr<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("SelectorExpr", |d| {
            d.field("x", Role::Value, node(self.x.as_ref()));
            d.field("sel", Role::Value, node(&self.sel));
        });
    }
}

impl Dump for IndexExpr<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("IndexExpr", |d| {
            d.field("x", Role::Value, node(self.x.as_ref()));
            d.field("lbrack", Role::Position, Value::Pos(self.lbrack));
            d.field("index", Role::Value, node(self.index.as_ref()));
            d.field("rbrack", Role::Position, Value::Pos(self.rbrack));
        });
    }
}

impl Dump for CallExpr<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("CallExpr", |d| {
            d.field("fun", Role::Value, node(self.fun.as_ref()));
            d.field("lparen", Role::Position, Value::Pos(self.lparen));
            d.field("args", Role::Value, nodes(&self.args));
            d.field("ellipsis", Role::Position, Value::Pos(self.ellipsis));
            d.field("rparen", Role::Position, Value::Pos(self.rparen));
        });
    }
}

impl Dump for StarExpr<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("StarExpr", |d| {
            d.field("star", Role::Position, Value::Pos(self.star));
            d.field("x", Role::Value, node(self.x.as_ref()));
        });
    }
}

impl Dump for UnaryExpr<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("UnaryExpr", |d| {
            d.field("op_pos", Role::Position, Value::Pos(self.op_pos));
            d.field("op", Role::Value, Value::Token(self.op.as_str()));
            d.field("x", Role::Value, node(self.x.as_ref()));
        });
    }
}

impl Dump for BinaryExpr<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("BinaryExpr", |d| {
            d.field("x", Role::Value, node(self.x.as_ref()));
            d.field("op_pos", Role::Position, Value::Pos(self.op_pos));
            d.field("op", Role::Value, Value::Token(self.op.as_str()));
            d.field("y", Role::Value, node(self.y.as_ref()));
        });
    }
}

impl Dump for ArrayType<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("ArrayType", |d| {
            d.field("lbrack", Role::Position, Value::Pos(self.lbrack));
            d.field("len", Role::Value, boxed(&self.len));
            d.field("elt", Role::Value, node(self.elt.as_ref()));
        });
    }
}

impl Dump for MapType<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("MapType", |d| {
            d.field("map_pos", Role::Position, Value::Pos(self.map_pos));
            d.field("key", Role::Value, node(self.key.as_ref()));
            d.field("value", Role::Value, node(self.value.as_ref()));
        });
    }
}

impl Dump for ChanType<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("ChanType", |d| {
            d.field("begin", Role::Position, Value::Pos(self.begin));
            d.field("dir", Role::Value, Value::Token(self.dir.as_str()));
            d.field("value", Role::Value, node(self.value.as_ref()));
        });
    }
}

impl Dump for StructType<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("StructType", |d| {
            d.field("struct_pos", Role::Position, Value::Pos(self.struct_pos));
            d.field("fields", Role::Value, node(&self.fields));
        });
    }
}

impl Dump for CompositeLit<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("CompositeLit", |d| {
            d.field("ty", Role::Value, boxed(&self.ty));
            d.field("lbrace", Role::Position, Value::Pos(self.lbrace));
            d.field("elts", Role::Value, nodes(&self.elts));
            d.field("rbrace", Role::Position, Value::Pos(self.rbrace));
        });
    }
}

impl Dump for KeyValueExpr<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("KeyValueExpr", |d| {
            d.field("key", Role::Value, node(self.key.as_ref()));
            d.field("colon", Role::Position, Value::Pos(self.colon));
            d.field("value", Role::Value, node(self.value.as_ref()));
        });
    }
}

impl Dump for FuncLit<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("FuncLit", |d| {
            d.field("ty", Role::Value, node(&self.ty));
            d.field("body", Role::Value, node(&self.body));
        });
    }
}

impl Dump for FuncType<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("FuncType", |d| {
            d.field("func", Role::Position, Value::Pos(self.func));
            d.field("params", Role::Value, node(&self.params));
            d.field("results", Role::Value, opt(&self.results));
        });
    }
}

impl Dump for SliceExpr<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("SliceExpr", |d| {
            d.field("x", Role::Value, node(self.x.as_ref()));
            d.field("lbrack", Role::Position, Value::Pos(self.lbrack));
            d.field("low", Role::Value, boxed(&self.low));
            d.field("high", Role::Value, boxed(&self.high));
            d.field("max", Role::Value, boxed(&self.max));
            d.field("rbrack", Role::Position, Value::Pos(self.rbrack));
        });
    }
}

impl Dump for TypeAssertExpr<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("TypeAssertExpr", |d| {
            d.field("x", Role::Value, node(self.x.as_ref()));
            d.field("lparen", Role::Position, Value::Pos(self.lparen));
            d.field("ty", Role::Value, boxed(&self.ty));
            d.field("rparen", Role::Position, Value::Pos(self.rparen));
        });
    }
}

impl Dump for Ellipsis<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("Ellipsis", |d| {
            d.field("ellipsis", Role::Position, Value::Pos(self.ellipsis));
            d.field("elt", Role::Value, boxed(&self.elt));
        });
    }
}

impl Dump for InterfaceType<'_> {
    fn dump(&self, d: &mut Dumper<'_>) {
        d.node("InterfaceType", |d| {
            d.field("interface_pos", Role::Position, Value::Pos(self.interface_pos));
            d.field("methods", Role::Value, node(&self.methods));
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{render, Filter};
    use crate::parser::ast::{
        BasicLit, Decl, Expr, Ident, LitKind, ObjKind, Object, Pos, ReturnStmt, Spec, Stmt,
    };
    use crate::parser::{parse_file, pos::SourceMap};

    #[test]
    fn test_dump_not_empty() {
        let files = SourceMap::default();
        let lit = BasicLit {
            value_pos: Pos::NONE,
            kind: LitKind::Imag,
            value: "2i",
        };

        assert_eq!(
            render(&files, &lit, Filter::NotEmpty),
            r#"     0  BasicLit {
     1  .  value_pos: -
     2  .  kind: IMAG
     3  .  value: "2i"
     4  }
"#
        );

        let ret = ReturnStmt {
            return_pos: Pos::NONE,
            results: vec![],
        };
        assert_eq!(
            render(&files, &ret, Filter::NotEmpty),
            "     0  ReturnStmt {\n     1  .  return_pos: -\n     2  }\n"
        );
        assert_eq!(
            render(&files, &ret, Filter::All),
            "     0  ReturnStmt {\n     1  .  return_pos: -\n     2  .  results: [] (len = 0) {\n     3  .  }\n     4  }\n"
        );
    }

    #[test]
    fn test_dump_nested() {
        let src = "return val, 1";
        let files = SourceMap::new("", src);
        let mut val = Ident::new("val", Pos::at(7));
        val.obj = Some(Object {
            kind: ObjKind::Var,
            name: "val",
        });
        let ret = ReturnStmt {
            return_pos: Pos::at(0),
            results: vec![
                Expr::Ident(val),
                Expr::BasicLit(BasicLit {
                    value_pos: Pos::at(12),
                    kind: LitKind::Int,
                    value: "1",
                }),
            ],
        };

        assert_eq!(
            render(&files, &ret, Filter::NotEmpty),
            r#"     0  ReturnStmt {
     1  .  return_pos: 1:1
     2  .  results: [] (len = 2) {
     3  .  .  0: Ident {
     4  .  .  .  name_pos: 1:8
     5  .  .  .  name: "val"
     6  .  .  .  obj: Object {
     7  .  .  .  .  kind: var
     8  .  .  .  .  name: "val"
     9  .  .  .  }
    10  .  .  }
    11  .  .  1: BasicLit {
    12  .  .  .  value_pos: 1:13
    13  .  .  .  kind: INT
    14  .  .  .  value: "1"
    15  .  .  }
    16  .  }
    17  }
"#
        );

        assert_eq!(
            render(&files, &ret, Filter::Compact),
            r#"     0  ReturnStmt {
     1  .  results: [] (len = 2) {
     2  .  .  0: Ident {
     3  .  .  .  name: "val"
     4  .  .  .  obj: Object {
     5  .  .  .  .  kind: var
     6  .  .  .  .  name: "val"
     7  .  .  .  }
     8  .  .  }
     9  .  .  1: BasicLit {
    10  .  .  .  kind: INT
    11  .  .  .  value: "1"
    12  .  .  }
    13  .  }
    14  }
"#
        );
    }

    #[test]
    fn test_dump_parsed_literals() {
        let src = "package p\n\nvar xs = []int{1}\n\nfunc f(ch chan int) {\n\tch <- 2\n}\n";
        let files = SourceMap::new("", src);
        let file = parse_file(src).unwrap();

        let Decl::Gen(decl) = &file.decls[0] else {
            panic!("expected declaration");
        };
        let Spec::Value(spec) = &decl.specs[0] else {
            panic!("expected value spec");
        };
        assert_eq!(
            render(&files, &spec.values[0], Filter::Compact),
            r#"     0  CompositeLit {
     1  .  ty: ArrayType {
     2  .  .  elt: Ident {
     3  .  .  .  name: "int"
     4  .  .  }
     5  .  }
     6  .  elts: [] (len = 1) {
     7  .  .  0: BasicLit {
     8  .  .  .  kind: INT
     9  .  .  .  value: "1"
    10  .  .  }
    11  .  }
    12  }
"#
        );

        let Decl::Func(f) = &file.decls[1] else {
            panic!("expected func");
        };
        let send = &f.body.as_ref().unwrap().list[0];
        assert!(matches!(send, Stmt::Send(_)));
        assert_eq!(
            render(&files, send, Filter::NotEmpty),
            r#"     0  SendStmt {
     1  .  chan: Ident {
     2  .  .  name_pos: 6:2
     3  .  .  name: "ch"
     4  .  .  obj: Object {
     5  .  .  .  kind: var
     6  .  .  .  name: "ch"
     7  .  .  }
     8  .  }
     9  .  arrow: 6:5
    10  .  value: BasicLit {
    11  .  .  value_pos: 6:8
    12  .  .  kind: INT
    13  .  .  value: "2"
    14  .  }
    15  }
"#
        );
    }
}
