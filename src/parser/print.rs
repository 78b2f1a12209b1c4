//! Go source printer.
//!
//! Output follows gofmt: tabs for nested blocks and the spacing of binary
//! expressions depends on the precedence of the operators around them
//! (`a*b + c`, `s[i+1]`). Call arguments and literal elements keep the line
//! breaks of the source, so the [`SourceMap`] of the parsed file is needed.
//! Grouped declarations and struct fields are not column aligned.

use super::ast::{
    BinaryExpr, BlockStmt, ChanDir, Expr, Field, FieldList, FuncType, GenDecl, Pos, Spec, Stmt,
    UnaryOp,
};
use super::pos::SourceMap;

const LOWEST_PREC: u8 = 0;
const UNARY_PREC: u8 = 6;
const HIGHEST_PREC: u8 = 7;

/// Longest function literal body that stays on one line
const MAX_INLINE_BODY: usize = 100;

/// Print a statement. Nested blocks are indented relative to the first line.
pub fn stmt(stmt: &Stmt<'_>, files: &SourceMap) -> String {
    GoWriter::new(files).write_stmt(stmt)
}

pub fn expr(e: &Expr<'_>, files: &SourceMap) -> String {
    GoWriter::new(files).write_expr(e, LOWEST_PREC, 1)
}

struct GoWriter<'a> {
    files: &'a SourceMap,
    level: usize,
}

impl<'a> GoWriter<'a> {
    fn new(files: &'a SourceMap) -> Self {
        Self { files, level: 0 }
    }

    /// Source line of a position, 0 when unknown.
    fn line(&self, pos: Pos) -> usize {
        self.files.position(pos).line
    }

    /// Write tabs to match current indent level.
    fn indent(&self, out: &mut String) {
        for _ in 0..self.level {
            out.push('\t');
        }
    }

    /// Write a statement on its own line. Labels sit one level to the left.
    fn write_line(&mut self, out: &mut String, stmt: &Stmt<'_>) {
        let level = match stmt {
            Stmt::Labeled(_) => self.level.saturating_sub(1),
            _ => self.level,
        };
        for _ in 0..level {
            out.push('\t');
        }
        out.push_str(&self.write_stmt(stmt));
    }

    fn write_block(&mut self, block: &BlockStmt<'_>) -> String {
        let mut out = String::from("{\n");
        self.level += 1;

        for stmt in &block.list {
            self.write_line(&mut out, stmt);
            out.push('\n');
        }

        self.level -= 1;
        self.indent(&mut out);
        out.push('}');
        out
    }

    /// Body of a switch or select: clauses line up with the keyword.
    fn write_clauses(&mut self, block: &BlockStmt<'_>) -> String {
        let mut out = String::from("{\n");
        for clause in &block.list {
            self.indent(&mut out);
            out.push_str(&self.write_stmt(clause));
            out.push('\n');
        }
        self.indent(&mut out);
        out.push('}');
        out
    }

    fn write_clause_body(&mut self, out: &mut String, body: &[Stmt<'_>]) {
        self.level += 1;
        for stmt in body {
            out.push('\n');
            self.write_line(out, stmt);
        }
        self.level -= 1;
    }

    fn write_stmt(&mut self, stmt: &Stmt<'_>) -> String {
        match stmt {
            Stmt::Decl(decl) => self.write_gen_decl(decl),
            Stmt::Expr(s) => self.write_expr(&s.x, LOWEST_PREC, 1),
            Stmt::Assign(s) => {
                let depth = if s.lhs.len() > 1 && s.rhs.len() > 1 {
                    2
                } else {
                    1
                };
                format!(
                    "{} {} {}",
                    self.write_expr_list(&s.lhs, depth),
                    s.tok.as_str(),
                    self.write_expr_list(&s.rhs, depth)
                )
            }
            Stmt::IncDec(s) => {
                format!("{}{}", self.write_expr(&s.x, LOWEST_PREC, 2), s.tok.as_str())
            }
            Stmt::Return(s) => {
                if s.results.is_empty() {
                    "return".to_string()
                } else {
                    format!("return {}", self.write_expr_list(&s.results, 1))
                }
            }
            Stmt::Branch(s) => match &s.label {
                Some(label) => format!("{} {}", s.tok.as_str(), label.name),
                None => s.tok.as_str().to_string(),
            },
            Stmt::Block(block) => self.write_block(block),
            Stmt::If(s) => {
                let mut out = String::from("if ");
                if let Some(init) = &s.init {
                    out.push_str(&self.write_stmt(init));
                    out.push_str("; ");
                }
                out.push_str(&self.write_expr(strip_parens(&s.cond), LOWEST_PREC, 1));
                out.push(' ');
                out.push_str(&self.write_block(&s.body));

                if let Some(r#else) = &s.r#else {
                    out.push_str(" else ");
                    out.push_str(&self.write_stmt(r#else));
                }
                out
            }
            Stmt::For(s) => {
                let mut out = String::from("for ");

                if s.init.is_none() && s.post.is_none() {
                    if let Some(cond) = &s.cond {
                        out.push_str(&self.write_expr(strip_parens(cond), LOWEST_PREC, 1));
                        out.push(' ');
                    }
                } else {
                    if let Some(init) = &s.init {
                        out.push_str(&self.write_stmt(init));
                    }
                    out.push_str("; ");
                    if let Some(cond) = &s.cond {
                        out.push_str(&self.write_expr(strip_parens(cond), LOWEST_PREC, 1));
                    }
                    out.push_str("; ");
                    if let Some(post) = &s.post {
                        out.push_str(&self.write_stmt(post));
                        out.push(' ');
                    }
                }

                out.push_str(&self.write_block(&s.body));
                out
            }
            Stmt::Range(s) => {
                let mut out = String::from("for ");

                if let Some(key) = &s.key {
                    out.push_str(&self.write_expr(key, LOWEST_PREC, 1));
                    if let Some(value) = &s.value {
                        out.push_str(", ");
                        out.push_str(&self.write_expr(value, LOWEST_PREC, 1));
                    }
                    if let Some(tok) = s.tok {
                        out.push(' ');
                        out.push_str(tok.as_str());
                        out.push(' ');
                    }
                }

                out.push_str("range ");
                out.push_str(&self.write_expr(strip_parens(&s.x), LOWEST_PREC, 1));
                out.push(' ');
                out.push_str(&self.write_block(&s.body));
                out
            }
            Stmt::Go(s) => format!("go {}", self.write_expr(&s.call, LOWEST_PREC, 1)),
            Stmt::Defer(s) => format!("defer {}", self.write_expr(&s.call, LOWEST_PREC, 1)),
            Stmt::Labeled(s) => {
                let mut out = format!("{}:\n", s.label.name);
                self.indent(&mut out);
                out.push_str(&self.write_stmt(&s.stmt));
                out
            }
            Stmt::Send(s) => format!(
                "{} <- {}",
                self.write_expr(&s.chan, LOWEST_PREC, 1),
                self.write_expr(&s.value, LOWEST_PREC, 1)
            ),
            Stmt::Switch(s) => {
                let mut out = String::from("switch ");
                if let Some(init) = &s.init {
                    out.push_str(&self.write_stmt(init));
                    out.push_str("; ");
                }
                if let Some(tag) = &s.tag {
                    out.push_str(&self.write_expr(strip_parens(tag), LOWEST_PREC, 1));
                    out.push(' ');
                }
                out.push_str(&self.write_clauses(&s.body));
                out
            }
            Stmt::TypeSwitch(s) => {
                let mut out = String::from("switch ");
                if let Some(init) = &s.init {
                    out.push_str(&self.write_stmt(init));
                    out.push_str("; ");
                }
                out.push_str(&self.write_stmt(&s.assign));
                out.push(' ');
                out.push_str(&self.write_clauses(&s.body));
                out
            }
            Stmt::Select(s) => format!("select {}", self.write_clauses(&s.body)),
            Stmt::Case(c) => {
                let mut out = if c.list.is_empty() {
                    String::from("default:")
                } else {
                    format!("case {}:", self.write_expr_list(&c.list, 1))
                };
                self.write_clause_body(&mut out, &c.body);
                out
            }
            Stmt::Comm(c) => {
                let mut out = match &c.comm {
                    Some(comm) => format!("case {}:", self.write_stmt(comm)),
                    None => String::from("default:"),
                };
                self.write_clause_body(&mut out, &c.body);
                out
            }
        }
    }

    fn write_gen_decl(&mut self, decl: &GenDecl<'_>) -> String {
        let mut out = String::from(decl.tok.as_str());

        if !decl.lparen.is_valid() {
            for spec in &decl.specs {
                out.push(' ');
                out.push_str(&self.write_spec(spec));
            }
            return out;
        }

        out.push_str(" (\n");
        self.level += 1;
        for spec in &decl.specs {
            self.indent(&mut out);
            out.push_str(&self.write_spec(spec));
            out.push('\n');
        }
        self.level -= 1;
        self.indent(&mut out);
        out.push(')');
        out
    }

    fn write_spec(&mut self, spec: &Spec<'_>) -> String {
        match spec {
            Spec::Value(s) => {
                let names: Vec<_> = s.names.iter().map(|n| n.name).collect();
                let mut out = names.join(", ");
                if let Some(ty) = &s.ty {
                    out.push(' ');
                    out.push_str(&self.write_expr(ty, LOWEST_PREC, 1));
                }
                if !s.values.is_empty() {
                    out.push_str(" = ");
                    out.push_str(&self.write_expr_list(&s.values, 1));
                }
                out
            }
            Spec::Type(s) => {
                let assign = if s.assign.is_valid() { " =" } else { "" };
                format!(
                    "{}{assign} {}",
                    s.name.name,
                    self.write_expr(&s.ty, LOWEST_PREC, 1)
                )
            }
        }
    }

    fn write_fields(&mut self, fields: &FieldList<'_>) -> String {
        if fields.list.is_empty() {
            return "{}".to_string();
        }

        let mut out = String::from(" {\n");
        self.level += 1;
        for field in &fields.list {
            self.indent(&mut out);
            out.push_str(&self.write_field(field));
            out.push('\n');
        }
        self.level -= 1;
        self.indent(&mut out);
        out.push('}');
        out
    }

    fn write_field(&mut self, Field { names, ty, tag }: &Field<'_>) -> String {
        let names: Vec<_> = names.iter().map(|n| n.name).collect();
        let mut out = names.join(", ");

        match ty {
            // Interface method
            Expr::FuncType(f) if !f.func.is_valid() && !out.is_empty() => {
                out.push_str(&self.write_signature(f));
            }
            ty => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&self.write_expr(ty, LOWEST_PREC, 1));
            }
        }

        if let Some(tag) = tag {
            out.push(' ');
            out.push_str(tag.value);
        }
        out
    }

    /// `(a int, b ...string) (int, error)`, a single unnamed result goes without parentheses.
    fn write_signature(&mut self, f: &FuncType<'_>) -> String {
        let params: Vec<_> = f.params.list.iter().map(|p| self.write_field(p)).collect();
        let mut out = format!("({})", params.join(", "));

        match &f.results {
            Some(results) => match results.list.as_slice() {
                [] => {}
                [Field { names, ty, .. }] if names.is_empty() => {
                    out.push(' ');
                    out.push_str(&self.write_expr(strip_parens(ty), LOWEST_PREC, 1));
                }
                list => {
                    let results: Vec<_> = list.iter().map(|r| self.write_field(r)).collect();
                    out.push_str(&format!(" ({})", results.join(", ")));
                }
            },
            None => {}
        }
        out
    }

    fn write_expr_list(&mut self, list: &[Expr<'_>], depth: usize) -> String {
        list.iter()
            .map(|e| self.write_expr(e, LOWEST_PREC, depth))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Write the items between `opening` and `closing` brackets. An item that starts a new
    /// line in the source starts one here too, one level deeper. When the closing bracket
    /// is on its own line the list ends with a comma and a line break.
    fn write_items(
        &mut self,
        list: &[Expr<'_>],
        depth: usize,
        (opening, closing): (Pos, Pos),
        last_suffix: &str,
    ) -> String {
        let mut out = String::new();
        let mut prev_line = self.line(opening);

        self.level += 1;
        for (i, e) in list.iter().enumerate() {
            let line = self.line(e.pos());
            let newline = prev_line > 0 && line > prev_line;
            if i > 0 {
                out.push(',');
                if !newline {
                    out.push(' ');
                }
            }
            if newline {
                out.push('\n');
                self.indent(&mut out);
            }
            out.push_str(&self.write_expr(e, LOWEST_PREC, depth));
            prev_line = self.line(e.end());
        }
        self.level -= 1;
        out.push_str(last_suffix);

        if prev_line > 0 && self.line(closing) > prev_line {
            if !list.is_empty() {
                out.push(',');
            }
            out.push('\n');
            self.indent(&mut out);
        }
        out
    }

    /// Write an expression that is an operand of an operator with precedence `prec1`.
    /// `depth` grows with the nesting inside calls and index expressions.
    fn write_expr(&mut self, e: &Expr<'_>, prec1: u8, depth: usize) -> String {
        match e {
            Expr::Ident(ident) => ident.name.to_string(),
            Expr::BasicLit(lit) => lit.value.to_string(),
            Expr::Binary(b) => self.write_binary(b, prec1, cutoff(b, depth), depth),
            Expr::Star(s) => {
                if UNARY_PREC < prec1 {
                    format!("(*{})", self.write_expr(&s.x, LOWEST_PREC, 1))
                } else {
                    format!("*{}", self.write_expr(&s.x, LOWEST_PREC, 1))
                }
            }
            Expr::Unary(u) => {
                if UNARY_PREC < prec1 {
                    format!("({})", self.write_expr(e, LOWEST_PREC, 1))
                } else {
                    format!(
                        "{}{}",
                        u.op.as_str(),
                        self.write_expr(&u.x, UNARY_PREC, depth)
                    )
                }
            }
            Expr::Paren(p) => {
                // Doubled parentheses collapse
                if let Expr::Paren(_) = p.x.as_ref() {
                    self.write_expr(&p.x, LOWEST_PREC, depth)
                } else {
                    format!(
                        "({})",
                        self.write_expr(&p.x, LOWEST_PREC, reduce_depth(depth))
                    )
                }
            }
            Expr::Selector(s) => {
                format!("{}.{}", self.write_expr(&s.x, HIGHEST_PREC, depth), s.sel.name)
            }
            Expr::Index(i) => format!(
                "{}[{}]",
                self.write_expr(&i.x, HIGHEST_PREC, 1),
                self.write_expr(&i.index, LOWEST_PREC, depth + 1)
            ),
            Expr::Call(c) => {
                let depth = if c.args.len() > 1 { depth + 1 } else { depth };
                let ellipsis = if c.ellipsis.is_valid() { "..." } else { "" };
                format!(
                    "{}({})",
                    self.write_expr(&c.fun, HIGHEST_PREC, depth),
                    self.write_items(&c.args, depth, (c.lparen, c.rparen), ellipsis)
                )
            }
            Expr::ArrayType(a) => {
                let len = match &a.len {
                    Some(len) => self.write_expr(len, LOWEST_PREC, 1),
                    None => String::new(),
                };
                format!("[{len}]{}", self.write_expr(&a.elt, LOWEST_PREC, 1))
            }
            Expr::MapType(m) => format!(
                "map[{}]{}",
                self.write_expr(&m.key, LOWEST_PREC, 1),
                self.write_expr(&m.value, LOWEST_PREC, 1)
            ),
            Expr::ChanType(c) => {
                let dir = match c.dir {
                    ChanDir::Both => "chan ",
                    ChanDir::Send => "chan<- ",
                    ChanDir::Recv => "<-chan ",
                };
                format!("{dir}{}", self.write_expr(&c.value, LOWEST_PREC, 1))
            }
            Expr::StructType(s) => format!("struct{}", self.write_fields(&s.fields)),
            Expr::InterfaceType(i) => format!("interface{}", self.write_fields(&i.methods)),
            Expr::FuncType(f) => format!("func{}", self.write_signature(f)),
            Expr::CompositeLit(c) => {
                let ty = match &c.ty {
                    Some(ty) => self.write_expr(ty, HIGHEST_PREC, depth),
                    None => String::new(),
                };
                format!(
                    "{ty}{{{}}}",
                    self.write_items(&c.elts, 1, (c.lbrace, c.rbrace), "")
                )
            }
            Expr::KeyValue(kv) => format!(
                "{}: {}",
                self.write_expr(&kv.key, LOWEST_PREC, depth),
                self.write_expr(&kv.value, LOWEST_PREC, depth)
            ),
            Expr::FuncLit(f) => {
                let signature = self.write_signature(&f.ty);
                let body = &f.body;

                if self.line(body.lbrace) == self.line(body.rbrace) {
                    if body.list.is_empty() {
                        return format!("func{signature} {{}}");
                    }
                    let stmts: Vec<_> = body.list.iter().map(|s| self.write_stmt(s)).collect();
                    let stmts = stmts.join("; ");
                    if !stmts.contains('\n') && signature.len() + stmts.len() <= MAX_INLINE_BODY {
                        return format!("func{signature} {{ {stmts} }}");
                    }
                }
                format!("func{signature} {}", self.write_block(body))
            }
            Expr::Slice(s) => {
                let indices = [&s.low, &s.high, &s.max];
                let indices = if s.max.is_some() {
                    &indices[..]
                } else {
                    &indices[..2]
                };

                // `s[a+b : c]` but `s[a+b:]`
                let present: Vec<_> = indices.iter().filter_map(|i| i.as_deref()).collect();
                let blanks = depth <= 1
                    && present.len() > 1
                    && present.iter().any(|i| matches!(i, Expr::Binary(_)));

                let mut out = self.write_expr(&s.x, HIGHEST_PREC, 1);
                out.push('[');
                for (i, index) in indices.iter().enumerate() {
                    if i > 0 {
                        if indices[i - 1].is_some() && blanks {
                            out.push(' ');
                        }
                        out.push(':');
                        if index.is_some() && blanks {
                            out.push(' ');
                        }
                    }
                    if let Some(index) = index {
                        out.push_str(&self.write_expr(index, LOWEST_PREC, depth + 1));
                    }
                }
                out.push(']');
                out
            }
            Expr::TypeAssert(t) => {
                let ty = match &t.ty {
                    Some(ty) => self.write_expr(ty, LOWEST_PREC, 1),
                    None => "type".to_string(),
                };
                format!("{}.({ty})", self.write_expr(&t.x, HIGHEST_PREC, depth))
            }
            Expr::Ellipsis(e) => match &e.elt {
                Some(elt) => format!("...{}", self.write_expr(elt, LOWEST_PREC, 1)),
                None => "...".to_string(),
            },
        }
    }

    fn write_binary(&mut self, b: &BinaryExpr<'_>, prec1: u8, cutoff: u8, depth: usize) -> String {
        let prec = b.op.precedence();
        if prec < prec1 {
            // Parentheses undo one level of depth
            let inner = self.write_binary(b, LOWEST_PREC, cutoff, reduce_depth(depth));
            return format!("({inner})");
        }

        let blank = if prec < cutoff { " " } else { "" };
        let x = self.write_expr(&b.x, prec, depth + diff_prec(&b.x, prec));
        let y = self.write_expr(&b.y, prec + 1, depth + 1);

        format!("{x}{blank}{}{blank}{y}", b.op.as_str())
    }
}

fn reduce_depth(depth: usize) -> usize {
    depth.saturating_sub(1).max(1)
}

fn diff_prec(e: &Expr<'_>, prec: u8) -> usize {
    match e {
        Expr::Binary(b) if b.op.precedence() == prec => 0,
        _ => 1,
    }
}

/// Operators with precedence below the cutoff are surrounded by blanks.
fn cutoff(e: &BinaryExpr<'_>, depth: usize) -> u8 {
    let (has4, has5, max_problem) = walk_binary(e);
    if max_problem > 0 {
        return max_problem + 1;
    }
    if has4 && has5 {
        return if depth == 1 { 5 } else { 4 };
    }
    if depth == 1 {
        6
    } else {
        4
    }
}

/// Collect which precedence levels appear in a chain of binary expressions
/// and whether removing blanks would glue two operators into another token.
fn walk_binary(e: &BinaryExpr<'_>) -> (bool, bool, u8) {
    let prec = e.op.precedence();
    let mut has4 = prec == 4;
    let mut has5 = prec == 5;
    let mut max_problem = 0;

    if let Expr::Binary(l) = e.x.as_ref() {
        // Lower precedence gets parenthesized
        if l.op.precedence() >= prec {
            let (h4, h5, mp) = walk_binary(l);
            has4 |= h4;
            has5 |= h5;
            max_problem = max_problem.max(mp);
        }
    }

    match e.y.as_ref() {
        Expr::Binary(r) => {
            if r.op.precedence() > prec {
                let (h4, h5, mp) = walk_binary(r);
                has4 |= h4;
                has5 |= h5;
                max_problem = max_problem.max(mp);
            }
        }
        // `a / *b` must not become a comment
        Expr::Star(_) => {
            if e.op.as_str() == "/" {
                max_problem = 5;
            }
        }
        Expr::Unary(u) => match (e.op.as_str(), u.op) {
            ("&", UnaryOp::And) | ("&", UnaryOp::Xor) => max_problem = 5,
            ("+", UnaryOp::Add) | ("-", UnaryOp::Sub) => max_problem = max_problem.max(4),
            _ => {}
        },
        _ => {}
    }

    (has4, has5, max_problem)
}

fn strip_parens<'a, 'src>(mut e: &'a Expr<'src>) -> &'a Expr<'src> {
    while let Expr::Paren(p) = e {
        e = p.x.as_ref();
    }
    e
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::stmt;
    use crate::parser::{
        ast::{Decl, Stmt},
        parse_file, SourceMap,
    };

    fn body(src: &str) -> Vec<String> {
        let files = SourceMap::new("", src);
        let file = parse_file(src).unwrap();
        match &file.decls[0] {
            Decl::Func(f) => f
                .body
                .as_ref()
                .unwrap()
                .list
                .iter()
                .map(|s| stmt(s, &files))
                .collect(),
            Decl::Gen(_) => panic!("expected func"),
        }
    }

    #[test]
    fn test_binary_spacing() {
        let lines = body(
            r#"package p

func f() {
	x = a+b
	x = a * b + c
	x = (a+b)*c
	x = f(a+b, c*d)
	x = f(a + b)
	x = a - -b
	x = a / *p
	x = m[k] == 1 && ok
}
"#,
        );
        assert_eq!(
            lines,
            vec![
                "x = a + b",
                "x = a*b + c",
                "x = (a + b) * c",
                "x = f(a+b, c*d)",
                "x = f(a + b)",
                "x = a - -b",
                "x = a / *p",
                "x = m[k] == 1 && ok",
            ]
        );
    }

    #[test]
    fn test_nested_blocks() {
        let lines = body(
            r#"package p

func f() {
	if (ok) {
		for i := 0; i < n; i++ {
			if i > 2 { break }
		}
	}
	const (
		a = 1
		b = 2
	)
}
"#,
        );
        assert_eq!(
            lines,
            vec![
                "if ok {\n\tfor i := 0; i < n; i++ {\n\t\tif i > 2 {\n\t\t\tbreak\n\t\t}\n\t}\n}",
                "const (\n\ta = 1\n\tb = 2\n)",
            ]
        );
    }

    #[test]
    fn test_line_breaks() {
        let lines = body(
            r#"package p

func f() {
	fmt.Println(a,
		b)
	xs := []int{
		1, 2,
		3,
	}
	f(x, y)
	if ok {
	loop:
		for {
			break loop
		}
	}
}
"#,
        );
        assert_eq!(
            lines,
            vec![
                "fmt.Println(a,\n\tb)",
                "xs := []int{\n\t1, 2,\n\t3,\n}",
                "f(x, y)",
                "if ok {\nloop:\n\tfor {\n\t\tbreak loop\n\t}\n}",
            ]
        );
    }

    #[test]
    fn test_func_literals() {
        let lines = body(
            r#"package p

func f() {
	add := func(a, b int) int { return a + b }
	noop := func() {}
	defer func() {
		recover()
	}()
	go func(ch chan<- int, done <-chan bool) (n int, err error) { return }(c, d)
}
"#,
        );
        assert_eq!(
            lines,
            vec![
                "add := func(a, b int) int { return a + b }",
                "noop := func() {}",
                "defer func() {\n\trecover()\n}()",
                "go func(ch chan<- int, done <-chan bool) (n int, err error) { return }(c, d)",
            ]
        );
    }

    #[test]
    fn test_types() {
        let src = r#"package p

type T struct {
	a, b int
	next *T
	Name string `json:"name"`
}

type E struct{}

type Reader interface {
	Read(p []byte) (n int, err error)
	Closer
}
"#;
        let files = SourceMap::new("", src);
        let file = parse_file(src).unwrap();
        let printed: Vec<_> = file
            .decls
            .iter()
            .map(|d| match d {
                Decl::Gen(g) => stmt(&Stmt::Decl(g.clone()), &files),
                Decl::Func(_) => panic!("expected declaration"),
            })
            .collect();
        assert_eq!(
            printed,
            vec![
                "type T struct {\n\ta, b int\n\tnext *T\n\tName string `json:\"name\"`\n}",
                "type E struct{}",
                "type Reader interface {\n\tRead(p []byte) (n int, err error)\n\tCloser\n}",
            ]
        );
    }
}
