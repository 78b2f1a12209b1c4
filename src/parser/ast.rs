use chumsky::span::SimpleSpan;

pub type Span = SimpleSpan<usize>;

/// Byte offset of a token in the parsed source.
///
/// Nodes built by hand (tests, synthesized trees) carry `Pos::NONE`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos(Option<usize>);

impl Pos {
    pub const NONE: Pos = Pos(None);

    pub fn at(offset: usize) -> Self {
        Pos(Some(offset))
    }

    pub fn offset(self) -> Option<usize> {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_some()
    }

    /// Position `n` bytes further, e.g. the end of a token starting here.
    pub fn add(self, n: usize) -> Self {
        Pos(self.0.map(|offset| offset + n))
    }
}

impl From<Span> for Pos {
    fn from(span: Span) -> Self {
        Pos(Some(span.start))
    }
}

/// A single source file.
#[derive(Debug, PartialEq, Clone)]
pub struct File<'src> {
    /// Position of the `package` keyword
    pub package: Pos,
    pub name: Ident<'src>,
    pub imports: Vec<ImportSpec<'src>>,
    /// Top-level declarations except imports, in source order
    pub decls: Vec<Decl<'src>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ImportSpec<'src> {
    /// Local package name (including `.` and `_`)
    pub name: Option<Ident<'src>>,
    pub path: Expr<'src>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Decl<'src> {
    Func(FuncDecl<'src>),
    /// `var`, `const` and `type` declarations
    Gen(GenDecl<'src>),
}

#[derive(Debug, PartialEq, Clone)]
pub struct FuncDecl<'src> {
    pub func: Pos,
    /// Methods only
    pub recv: Option<FieldList<'src>>,
    pub name: Ident<'src>,
    pub params: FieldList<'src>,
    pub results: Option<FieldList<'src>>,
    /// Missing for forward declarations
    pub body: Option<BlockStmt<'src>>,
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct FieldList<'src> {
    pub opening: Pos,
    pub list: Vec<Field<'src>>,
    pub closing: Pos,
}

/// A parameter, result, struct field or interface method group: `a, b int`
#[derive(Debug, PartialEq, Clone)]
pub struct Field<'src> {
    pub names: Vec<Ident<'src>>,
    pub ty: Expr<'src>,
    /// Struct field tag
    pub tag: Option<BasicLit<'src>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct GenDecl<'src> {
    pub tok_pos: Pos,
    pub tok: DeclTok,
    /// Valid only for grouped declarations: `var ( ... )`
    pub lparen: Pos,
    pub specs: Vec<Spec<'src>>,
    pub rparen: Pos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclTok {
    Var,
    Const,
    Type,
}

impl DeclTok {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclTok::Var => "var",
            DeclTok::Const => "const",
            DeclTok::Type => "type",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Spec<'src> {
    Value(ValueSpec<'src>),
    Type(TypeSpec<'src>),
}

#[derive(Debug, PartialEq, Clone)]
pub struct ValueSpec<'src> {
    pub names: Vec<Ident<'src>>,
    pub ty: Option<Expr<'src>>,
    pub values: Vec<Expr<'src>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct TypeSpec<'src> {
    pub name: Ident<'src>,
    /// Valid only for aliases: `type A = B`
    pub assign: Pos,
    pub ty: Expr<'src>,
}

/// A single statement
#[derive(Debug, PartialEq, Clone)]
pub enum Stmt<'src> {
    Decl(GenDecl<'src>),
    Expr(ExprStmt<'src>),
    Assign(AssignStmt<'src>),
    IncDec(IncDecStmt<'src>),
    Return(ReturnStmt<'src>),
    Branch(BranchStmt<'src>),
    Block(BlockStmt<'src>),
    If(IfStmt<'src>),
    For(ForStmt<'src>),
    Range(RangeStmt<'src>),
    Go(GoStmt<'src>),
    Defer(DeferStmt<'src>),
    Labeled(LabeledStmt<'src>),
    Send(SendStmt<'src>),
    Switch(SwitchStmt<'src>),
    TypeSwitch(TypeSwitchStmt<'src>),
    Select(SelectStmt<'src>),
    /// Only inside the body of a `switch`
    Case(CaseClause<'src>),
    /// Only inside the body of a `select`
    Comm(CommClause<'src>),
}

#[derive(Debug, PartialEq, Clone)]
pub struct ExprStmt<'src> {
    pub x: Expr<'src>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct AssignStmt<'src> {
    pub lhs: Vec<Expr<'src>>,
    pub tok_pos: Pos,
    pub tok: AssignTok,
    pub rhs: Vec<Expr<'src>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignTok {
    Assign, // =
    Define, // :=
    Add,    // +=
    Sub,    // -=
    Mul,    // *=
    Quo,    // /=
    Rem,    // %=
    And,    // &=
    Or,     // |=
    Xor,    // ^=
    Shl,    // <<=
    Shr,    // >>=
    AndNot, // &^=
}

impl AssignTok {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignTok::Assign => "=",
            AssignTok::Define => ":=",
            AssignTok::Add => "+=",
            AssignTok::Sub => "-=",
            AssignTok::Mul => "*=",
            AssignTok::Quo => "/=",
            AssignTok::Rem => "%=",
            AssignTok::And => "&=",
            AssignTok::Or => "|=",
            AssignTok::Xor => "^=",
            AssignTok::Shl => "<<=",
            AssignTok::Shr => ">>=",
            AssignTok::AndNot => "&^=",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct IncDecStmt<'src> {
    pub x: Expr<'src>,
    pub tok_pos: Pos,
    pub tok: IncDec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncDec {
    Inc,
    Dec,
}

impl IncDec {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncDec::Inc => "++",
            IncDec::Dec => "--",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ReturnStmt<'src> {
    pub return_pos: Pos,
    pub results: Vec<Expr<'src>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct BranchStmt<'src> {
    pub tok_pos: Pos,
    pub tok: BranchTok,
    pub label: Option<Ident<'src>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchTok {
    Break,
    Continue,
    Goto,
    Fallthrough,
}

impl BranchTok {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchTok::Break => "break",
            BranchTok::Continue => "continue",
            BranchTok::Goto => "goto",
            BranchTok::Fallthrough => "fallthrough",
        }
    }
}

/// Statements inside curly braces.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct BlockStmt<'src> {
    pub lbrace: Pos,
    pub list: Vec<Stmt<'src>>,
    pub rbrace: Pos,
}

#[derive(Debug, PartialEq, Clone)]
pub struct IfStmt<'src> {
    pub if_pos: Pos,
    pub init: Option<Box<Stmt<'src>>>,
    pub cond: Expr<'src>,
    pub body: BlockStmt<'src>,
    /// Either another `If` or a `Block`
    pub r#else: Option<Box<Stmt<'src>>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ForStmt<'src> {
    pub for_pos: Pos,
    pub init: Option<Box<Stmt<'src>>>,
    pub cond: Option<Expr<'src>>,
    pub post: Option<Box<Stmt<'src>>>,
    pub body: BlockStmt<'src>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct RangeStmt<'src> {
    pub for_pos: Pos,
    pub key: Option<Expr<'src>>,
    pub value: Option<Expr<'src>>,
    pub tok_pos: Pos,
    /// `:=` or `=`, missing for `for range x`
    pub tok: Option<AssignTok>,
    pub x: Expr<'src>,
    pub body: BlockStmt<'src>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct GoStmt<'src> {
    pub go_pos: Pos,
    pub call: Expr<'src>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct DeferStmt<'src> {
    pub defer_pos: Pos,
    pub call: Expr<'src>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct LabeledStmt<'src> {
    pub label: Ident<'src>,
    pub colon: Pos,
    pub stmt: Box<Stmt<'src>>,
}

/// `ch <- v`
#[derive(Debug, PartialEq, Clone)]
pub struct SendStmt<'src> {
    pub chan: Expr<'src>,
    pub arrow: Pos,
    pub value: Expr<'src>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct SwitchStmt<'src> {
    pub switch_pos: Pos,
    pub init: Option<Box<Stmt<'src>>>,
    pub tag: Option<Expr<'src>>,
    /// Holds `Case` statements only
    pub body: BlockStmt<'src>,
}

/// `switch v := x.(type) { ... }`
#[derive(Debug, PartialEq, Clone)]
pub struct TypeSwitchStmt<'src> {
    pub switch_pos: Pos,
    pub init: Option<Box<Stmt<'src>>>,
    /// `x.(type)` or `v := x.(type)`
    pub assign: Box<Stmt<'src>>,
    pub body: BlockStmt<'src>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct SelectStmt<'src> {
    pub select_pos: Pos,
    /// Holds `Comm` statements only
    pub body: BlockStmt<'src>,
}

/// `case a, b:` or `default:` when the list is empty
#[derive(Debug, PartialEq, Clone)]
pub struct CaseClause<'src> {
    pub case_pos: Pos,
    pub list: Vec<Expr<'src>>,
    pub colon: Pos,
    pub body: Vec<Stmt<'src>>,
}

/// `case v := <-ch:` or `default:` when there is no statement
#[derive(Debug, PartialEq, Clone)]
pub struct CommClause<'src> {
    pub case_pos: Pos,
    pub comm: Option<Box<Stmt<'src>>>,
    pub colon: Pos,
    pub body: Vec<Stmt<'src>>,
}

/// A single expression. Type expressions share the same enum.
#[derive(Debug, PartialEq, Clone)]
pub enum Expr<'src> {
    Ident(Ident<'src>),
    BasicLit(BasicLit<'src>),
    Paren(ParenExpr<'src>),
    Selector(SelectorExpr<'src>),
    Index(IndexExpr<'src>),
    Call(CallExpr<'src>),
    Star(StarExpr<'src>),
    Unary(UnaryExpr<'src>),
    Binary(BinaryExpr<'src>),
    ArrayType(ArrayType<'src>),
    MapType(MapType<'src>),
    ChanType(ChanType<'src>),
    StructType(StructType<'src>),
    CompositeLit(CompositeLit<'src>),
    KeyValue(KeyValueExpr<'src>),
    FuncLit(FuncLit<'src>),
    Slice(SliceExpr<'src>),
    TypeAssert(TypeAssertExpr<'src>),
    Ellipsis(Ellipsis<'src>),
    FuncType(FuncType<'src>),
    InterfaceType(InterfaceType<'src>),
}

impl Expr<'_> {
    /// Position of the first character.
    pub fn pos(&self) -> Pos {
        match self {
            Expr::Ident(e) => e.name_pos,
            Expr::BasicLit(e) => e.value_pos,
            Expr::Paren(e) => e.lparen,
            Expr::Selector(e) => e.x.pos(),
            Expr::Index(e) => e.x.pos(),
            Expr::Call(e) => e.fun.pos(),
            Expr::Star(e) => e.star,
            Expr::Unary(e) => e.op_pos,
            Expr::Binary(e) => e.x.pos(),
            Expr::ArrayType(e) => e.lbrack,
            Expr::MapType(e) => e.map_pos,
            Expr::ChanType(e) => e.begin,
            Expr::StructType(e) => e.struct_pos,
            Expr::CompositeLit(e) => match &e.ty {
                Some(ty) => ty.pos(),
                None => e.lbrace,
            },
            Expr::KeyValue(e) => e.key.pos(),
            Expr::FuncLit(e) => e.ty.func,
            Expr::Slice(e) => e.x.pos(),
            Expr::TypeAssert(e) => e.x.pos(),
            Expr::Ellipsis(e) => e.ellipsis,
            Expr::FuncType(e) => e.func,
            Expr::InterfaceType(e) => e.interface_pos,
        }
    }

    /// Position right after the last character.
    pub fn end(&self) -> Pos {
        match self {
            Expr::Ident(e) => e.name_pos.add(e.name.len()),
            Expr::BasicLit(e) => e.value_pos.add(e.value.len()),
            Expr::Paren(e) => e.rparen.add(1),
            Expr::Selector(e) => e.sel.name_pos.add(e.sel.name.len()),
            Expr::Index(e) => e.rbrack.add(1),
            Expr::Call(e) => e.rparen.add(1),
            Expr::Star(e) => e.x.end(),
            Expr::Unary(e) => e.x.end(),
            Expr::Binary(e) => e.y.end(),
            Expr::ArrayType(e) => e.elt.end(),
            Expr::MapType(e) => e.value.end(),
            Expr::ChanType(e) => e.value.end(),
            Expr::StructType(e) => e.fields.closing.add(1),
            Expr::CompositeLit(e) => e.rbrace.add(1),
            Expr::KeyValue(e) => e.value.end(),
            Expr::FuncLit(e) => e.body.rbrace.add(1),
            Expr::Slice(e) => e.rbrack.add(1),
            Expr::TypeAssert(e) => e.rparen.add(1),
            Expr::Ellipsis(e) => match &e.elt {
                Some(elt) => elt.end(),
                None => e.ellipsis.add(3),
            },
            Expr::FuncType(e) => e.end(),
            Expr::InterfaceType(e) => e.methods.closing.add(1),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Ident<'src> {
    pub name_pos: Pos,
    pub name: &'src str,
    /// What the name refers to. Unresolved for package names and predeclared identifiers.
    pub obj: Option<Object<'src>>,
}

impl<'src> Ident<'src> {
    pub fn new(name: &'src str, name_pos: Pos) -> Self {
        Self {
            name_pos,
            name,
            obj: None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name == "_"
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Object<'src> {
    pub kind: ObjKind,
    pub name: &'src str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjKind {
    Pkg,
    Con,
    Typ,
    Var,
    Fun,
    Lbl,
}

impl ObjKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjKind::Pkg => "package",
            ObjKind::Con => "const",
            ObjKind::Typ => "type",
            ObjKind::Var => "var",
            ObjKind::Fun => "func",
            ObjKind::Lbl => "label",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct BasicLit<'src> {
    pub value_pos: Pos,
    pub kind: LitKind,
    /// Literal exactly as written, quotes included
    pub value: &'src str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

impl LitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LitKind::Int => "INT",
            LitKind::Float => "FLOAT",
            LitKind::Imag => "IMAG",
            LitKind::Char => "CHAR",
            LitKind::String => "STRING",
        }
    }

    /// Classify a number literal by its spelling.
    pub fn of_number(text: &str) -> Self {
        let radix = text.len() > 1
            && text.starts_with('0')
            && matches!(text.as_bytes()[1], b'x' | b'X' | b'o' | b'O' | b'b' | b'B');

        let hex = radix && matches!(text.as_bytes()[1], b'x' | b'X');

        if text.ends_with('i') {
            LitKind::Imag
        } else if hex && text.contains(['p', 'P']) {
            LitKind::Float
        } else if !radix && text.contains(['.', 'e', 'E']) {
            LitKind::Float
        } else {
            LitKind::Int
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ParenExpr<'src> {
    pub lparen: Pos,
    pub x: Box<Expr<'src>>,
    pub rparen: Pos,
}

/// Field or package member access: `x.sel`
#[derive(Debug, PartialEq, Clone)]
pub struct SelectorExpr<'src> {
    pub x: Box<Expr<'src>>,
    pub sel: Ident<'src>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct IndexExpr<'src> {
    pub x: Box<Expr<'src>>,
    pub lbrack: Pos,
    pub index: Box<Expr<'src>>,
    pub rbrack: Pos,
}

#[derive(Debug, PartialEq, Clone)]
pub struct CallExpr<'src> {
    pub fun: Box<Expr<'src>>,
    pub lparen: Pos,
    pub args: Vec<Expr<'src>>,
    /// Valid for `f(xs...)`
    pub ellipsis: Pos,
    pub rparen: Pos,
}

/// Pointer type or dereference: `*x`
#[derive(Debug, PartialEq, Clone)]
pub struct StarExpr<'src> {
    pub star: Pos,
    pub x: Box<Expr<'src>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct UnaryExpr<'src> {
    pub op_pos: Pos,
    pub op: UnaryOp,
    pub x: Box<Expr<'src>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Add,   // +
    Sub,   // -
    Not,   // !
    Xor,   // ^
    And,   // &
    Arrow, // <-
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Add => "+",
            UnaryOp::Sub => "-",
            UnaryOp::Not => "!",
            UnaryOp::Xor => "^",
            UnaryOp::And => "&",
            UnaryOp::Arrow => "<-",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct BinaryExpr<'src> {
    pub x: Box<Expr<'src>>,
    pub op_pos: Pos,
    pub op: BinaryOp,
    pub y: Box<Expr<'src>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Boolean
    LOr,  // ||
    LAnd, // &&

    // Comparison
    Eql, // ==
    Neq, // !=
    Lss, // <
    Leq, // <=
    Gtr, // >
    Geq, // >=

    // Algebraic
    Add, // +
    Sub, // -
    Mul, // *
    Quo, // /
    Rem, // %

    // Bitwise
    Or,     // |
    Xor,    // ^
    And,    // &
    AndNot, // &^
    Shl,    // <<
    Shr,    // >>
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::LOr => "||",
            BinaryOp::LAnd => "&&",
            BinaryOp::Eql => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::Lss => "<",
            BinaryOp::Leq => "<=",
            BinaryOp::Gtr => ">",
            BinaryOp::Geq => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Quo => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::And => "&",
            BinaryOp::AndNot => "&^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
        }
    }

    /// Binding strength, from 1 (`||`) to 5 (`*`).
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOp::LOr => 1,
            BinaryOp::LAnd => 2,
            BinaryOp::Eql
            | BinaryOp::Neq
            | BinaryOp::Lss
            | BinaryOp::Leq
            | BinaryOp::Gtr
            | BinaryOp::Geq => 3,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Or | BinaryOp::Xor => 4,
            BinaryOp::Mul
            | BinaryOp::Quo
            | BinaryOp::Rem
            | BinaryOp::Shl
            | BinaryOp::Shr
            | BinaryOp::And
            | BinaryOp::AndNot => 5,
        }
    }
}

/// `[N]T` or `[]T`
#[derive(Debug, PartialEq, Clone)]
pub struct ArrayType<'src> {
    pub lbrack: Pos,
    pub len: Option<Box<Expr<'src>>>,
    pub elt: Box<Expr<'src>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct MapType<'src> {
    pub map_pos: Pos,
    pub key: Box<Expr<'src>>,
    pub value: Box<Expr<'src>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ChanType<'src> {
    pub begin: Pos,
    pub dir: ChanDir,
    pub value: Box<Expr<'src>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both, // chan T
    Send, // chan<- T
    Recv, // <-chan T
}

impl ChanDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChanDir::Both => "chan",
            ChanDir::Send => "chan<-",
            ChanDir::Recv => "<-chan",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct StructType<'src> {
    pub struct_pos: Pos,
    pub fields: FieldList<'src>,
}

/// `T{a, b}`, or `{a, b}` inside another literal where the type is implied
#[derive(Debug, PartialEq, Clone)]
pub struct CompositeLit<'src> {
    pub ty: Option<Box<Expr<'src>>>,
    pub lbrace: Pos,
    pub elts: Vec<Expr<'src>>,
    pub rbrace: Pos,
}

/// `key: value` inside a composite literal
#[derive(Debug, PartialEq, Clone)]
pub struct KeyValueExpr<'src> {
    pub key: Box<Expr<'src>>,
    pub colon: Pos,
    pub value: Box<Expr<'src>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct FuncLit<'src> {
    pub ty: FuncType<'src>,
    pub body: BlockStmt<'src>,
}

/// `func(a int) (int, error)`
#[derive(Debug, PartialEq, Clone)]
pub struct FuncType<'src> {
    /// Missing for interface methods
    pub func: Pos,
    pub params: FieldList<'src>,
    pub results: Option<FieldList<'src>>,
}

impl FuncType<'_> {
    pub fn end(&self) -> Pos {
        match &self.results {
            Some(results) if results.closing.is_valid() => results.closing.add(1),
            Some(results) => match results.list.last() {
                Some(field) => field.ty.end(),
                None => self.params.closing.add(1),
            },
            None => self.params.closing.add(1),
        }
    }
}

/// `s[low:high]` or `s[low:high:max]`
#[derive(Debug, PartialEq, Clone)]
pub struct SliceExpr<'src> {
    pub x: Box<Expr<'src>>,
    pub lbrack: Pos,
    pub low: Option<Box<Expr<'src>>>,
    pub high: Option<Box<Expr<'src>>>,
    pub max: Option<Box<Expr<'src>>>,
    pub rbrack: Pos,
}

/// `x.(T)`, the type is missing in a type switch: `x.(type)`
#[derive(Debug, PartialEq, Clone)]
pub struct TypeAssertExpr<'src> {
    pub x: Box<Expr<'src>>,
    pub lparen: Pos,
    pub ty: Option<Box<Expr<'src>>>,
    pub rparen: Pos,
}

/// `...T` in parameters or `[...]T` in array literals
#[derive(Debug, PartialEq, Clone)]
pub struct Ellipsis<'src> {
    pub ellipsis: Pos,
    pub elt: Option<Box<Expr<'src>>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct InterfaceType<'src> {
    pub interface_pos: Pos,
    /// Methods have a name and a `FuncType`, embedded interfaces have no name
    pub methods: FieldList<'src>,
}
