//! Fun syntax tree.

#[derive(Debug, PartialEq, Clone)]
pub struct Module {
    pub name: String,
    pub imports: Vec<Import>,
    pub top_levels: Vec<TopLevel>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Import {
    pub path: String,
}

#[derive(Debug, PartialEq, Clone)]
pub enum TopLevel {
    FuncDecl(FuncDecl),
}

#[derive(Debug, PartialEq, Clone)]
pub struct FuncDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub results: Vec<Type>,
    pub body: FuncBody,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Param {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Type {
    /// Named type without parameters: `int`, `string`
    Atomic(String),
}

#[derive(Debug, PartialEq, Clone)]
pub enum FuncBody {
    /// Body made of exactly one statement
    Single(Expr),
    /// Source lines kept as they are, one per statement
    Inline(Vec<String>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Var(String),
    BinaryOp(BinaryOp),
    FuncName(FuncName),
    Application(Application),
    IntegerLit(i64),
    DoubleLit(f64),
    StringLit(String),
    CharLit(char),
    /// Two or more values returned together
    Results(Vec<Expr>),
}

#[derive(Debug, PartialEq, Clone)]
pub struct BinaryOp {
    pub x: Box<Expr>,
    pub op: Operator,
    pub y: Box<Expr>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Operator(pub String);

/// Possibly qualified function name: `inc`, `fmt.Println`
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FuncName(pub String);

#[derive(Debug, PartialEq, Clone)]
pub struct Application {
    pub name: FuncName,
    pub args: Vec<Expr>,
}
