//! Identifier resolution.
//!
//! Binds every identifier that refers to a declaration in the same file to an
//! [`Object`]. Package names, predeclared identifiers (`int`, `true`, `len`)
//! and selector members are left unresolved.

use std::collections::HashMap;

use tracing::trace;

use super::ast::{
    AssignTok, BlockStmt, Decl, DeclTok, Expr, FieldList, File, FuncDecl, GenDecl, Ident,
    ObjKind, Object, Spec, Stmt,
};

pub fn resolve(file: &mut File<'_>) {
    let mut resolver = Resolver::default();
    resolver.file(file);
}

#[derive(Default)]
struct Resolver<'src> {
    scopes: Vec<HashMap<&'src str, ObjKind>>,
}

impl<'src> Resolver<'src> {
    fn open(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn close(&mut self) {
        self.scopes.pop();
    }

    fn declare(&mut self, ident: &mut Ident<'src>, kind: ObjKind) {
        if ident.is_blank() {
            return;
        }
        ident.obj = Some(Object {
            kind,
            name: ident.name,
        });
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(ident.name, kind);
        }
    }

    fn lookup(&self, ident: &mut Ident<'src>) {
        if ident.is_blank() {
            return;
        }
        let found = self
            .scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(ident.name).copied());

        match found {
            Some(kind) => {
                ident.obj = Some(Object {
                    kind,
                    name: ident.name,
                })
            }
            None => trace!(name = ident.name, "unresolved identifier"),
        }
    }

    fn file(&mut self, file: &mut File<'src>) {
        self.open();

        // Package level names are visible in the whole file regardless of order
        for decl in file.decls.iter_mut() {
            match decl {
                // Methods are reached through their receiver only
                Decl::Func(f) if f.recv.is_some() => {}
                Decl::Func(f) => self.declare(&mut f.name, ObjKind::Fun),
                Decl::Gen(g) => {
                    let kind = decl_kind(g.tok);
                    for spec in g.specs.iter_mut() {
                        match spec {
                            Spec::Value(s) => s.names.iter_mut().for_each(|n| self.declare(n, kind)),
                            Spec::Type(s) => self.declare(&mut s.name, kind),
                        }
                    }
                }
            }
        }

        for decl in file.decls.iter_mut() {
            match decl {
                Decl::Func(f) => self.func(f),
                Decl::Gen(g) => {
                    for spec in g.specs.iter_mut() {
                        match spec {
                            Spec::Value(s) => {
                                if let Some(ty) = &mut s.ty {
                                    self.expr(ty);
                                }
                                s.values.iter_mut().for_each(|v| self.expr(v));
                            }
                            Spec::Type(s) => self.expr(&mut s.ty),
                        }
                    }
                }
            }
        }

        self.close();
    }

    fn func(&mut self, f: &mut FuncDecl<'src>) {
        self.open();
        if let Some(recv) = &mut f.recv {
            self.fields(recv, ObjKind::Var);
        }
        self.signature(&mut f.params, &mut f.results);
        if let Some(body) = &mut f.body {
            // Body shares the scope of the parameters
            body.list.iter_mut().for_each(|s| self.stmt(s));
        }
        self.close();
    }

    fn signature(&mut self, params: &mut FieldList<'src>, results: &mut Option<FieldList<'src>>) {
        self.fields(params, ObjKind::Var);
        if let Some(results) = results {
            self.fields(results, ObjKind::Var);
        }
    }

    /// Resolve field types and declare field names in the current scope.
    fn fields(&mut self, fields: &mut FieldList<'src>, kind: ObjKind) {
        for field in fields.list.iter_mut() {
            self.expr(&mut field.ty);
            field.names.iter_mut().for_each(|n| self.declare(n, kind));
        }
    }

    fn block(&mut self, block: &mut BlockStmt<'src>) {
        self.open();
        block.list.iter_mut().for_each(|s| self.stmt(s));
        self.close();
    }

    /// Every case clause is a scope of its own.
    fn clause(&mut self, head: Option<&mut Stmt<'src>>, body: &mut [Stmt<'src>]) {
        self.open();
        if let Some(head) = head {
            self.stmt(head);
        }
        body.iter_mut().for_each(|s| self.stmt(s));
        self.close();
    }

    fn gen_decl(&mut self, decl: &mut GenDecl<'src>) {
        let kind = decl_kind(decl.tok);
        for spec in decl.specs.iter_mut() {
            match spec {
                Spec::Value(s) => {
                    if let Some(ty) = &mut s.ty {
                        self.expr(ty);
                    }
                    s.values.iter_mut().for_each(|v| self.expr(v));
                    s.names.iter_mut().for_each(|n| self.declare(n, kind));
                }
                Spec::Type(s) => {
                    self.declare(&mut s.name, kind);
                    self.expr(&mut s.ty);
                }
            }
        }
    }

    fn stmt(&mut self, stmt: &mut Stmt<'src>) {
        match stmt {
            Stmt::Decl(d) => self.gen_decl(d),
            Stmt::Expr(s) => self.expr(&mut s.x),
            Stmt::Assign(s) => {
                s.rhs.iter_mut().for_each(|e| self.expr(e));
                if s.tok == AssignTok::Define {
                    for lhs in s.lhs.iter_mut() {
                        match lhs {
                            Expr::Ident(ident) => self.declare(ident, ObjKind::Var),
                            other => self.expr(other),
                        }
                    }
                } else {
                    s.lhs.iter_mut().for_each(|e| self.expr(e));
                }
            }
            Stmt::IncDec(s) => self.expr(&mut s.x),
            Stmt::Return(s) => s.results.iter_mut().for_each(|e| self.expr(e)),
            // Labels live in their own namespace
            Stmt::Branch(_) => {}
            Stmt::Block(b) => self.block(b),
            Stmt::If(s) => {
                self.open();
                if let Some(init) = &mut s.init {
                    self.stmt(init);
                }
                self.expr(&mut s.cond);
                self.block(&mut s.body);
                if let Some(r#else) = &mut s.r#else {
                    self.stmt(r#else);
                }
                self.close();
            }
            Stmt::For(s) => {
                self.open();
                if let Some(init) = &mut s.init {
                    self.stmt(init);
                }
                if let Some(cond) = &mut s.cond {
                    self.expr(cond);
                }
                if let Some(post) = &mut s.post {
                    self.stmt(post);
                }
                self.block(&mut s.body);
                self.close();
            }
            Stmt::Range(s) => {
                self.expr(&mut s.x);
                self.open();
                for e in [&mut s.key, &mut s.value].into_iter().flatten() {
                    match (s.tok, e) {
                        (Some(AssignTok::Define), Expr::Ident(ident)) => {
                            self.declare(ident, ObjKind::Var)
                        }
                        (_, e) => self.expr(e),
                    }
                }
                self.block(&mut s.body);
                self.close();
            }
            Stmt::Go(s) => self.expr(&mut s.call),
            Stmt::Defer(s) => self.expr(&mut s.call),
            Stmt::Labeled(s) => self.stmt(&mut s.stmt),
            Stmt::Send(s) => {
                self.expr(&mut s.chan);
                self.expr(&mut s.value);
            }
            Stmt::Switch(s) => {
                self.open();
                if let Some(init) = &mut s.init {
                    self.stmt(init);
                }
                if let Some(tag) = &mut s.tag {
                    self.expr(tag);
                }
                s.body.list.iter_mut().for_each(|c| self.stmt(c));
                self.close();
            }
            Stmt::TypeSwitch(s) => {
                self.open();
                if let Some(init) = &mut s.init {
                    self.stmt(init);
                }
                // `v := x.(type)` declares `v` for all clauses
                self.stmt(&mut s.assign);
                s.body.list.iter_mut().for_each(|c| self.stmt(c));
                self.close();
            }
            Stmt::Select(s) => s.body.list.iter_mut().for_each(|c| self.stmt(c)),
            Stmt::Case(c) => {
                c.list.iter_mut().for_each(|e| self.expr(e));
                self.clause(None, &mut c.body);
            }
            Stmt::Comm(c) => self.clause(c.comm.as_deref_mut(), &mut c.body),
        }
    }

    fn expr(&mut self, expr: &mut Expr<'src>) {
        match expr {
            Expr::Ident(ident) => self.lookup(ident),
            Expr::BasicLit(_) => {}
            Expr::Paren(e) => self.expr(&mut e.x),
            Expr::Selector(e) => self.expr(&mut e.x),
            Expr::Index(e) => {
                self.expr(&mut e.x);
                self.expr(&mut e.index);
            }
            Expr::Call(e) => {
                self.expr(&mut e.fun);
                e.args.iter_mut().for_each(|a| self.expr(a));
            }
            Expr::Star(e) => self.expr(&mut e.x),
            Expr::Unary(e) => self.expr(&mut e.x),
            Expr::Binary(e) => {
                self.expr(&mut e.x);
                self.expr(&mut e.y);
            }
            Expr::ArrayType(e) => {
                if let Some(len) = &mut e.len {
                    self.expr(len);
                }
                self.expr(&mut e.elt);
            }
            Expr::MapType(e) => {
                self.expr(&mut e.key);
                self.expr(&mut e.value);
            }
            Expr::ChanType(e) => self.expr(&mut e.value),
            Expr::StructType(e) => {
                self.open();
                self.fields(&mut e.fields, ObjKind::Var);
                self.close();
            }
            Expr::CompositeLit(e) => {
                if let Some(ty) = &mut e.ty {
                    self.expr(ty);
                }
                for elt in e.elts.iter_mut() {
                    match elt {
                        // Struct field names are looked up in the type, not in scope
                        Expr::KeyValue(kv) if matches!(kv.key.as_ref(), Expr::Ident(_)) => {
                            self.expr(&mut kv.value)
                        }
                        elt => self.expr(elt),
                    }
                }
            }
            Expr::KeyValue(e) => {
                self.expr(&mut e.key);
                self.expr(&mut e.value);
            }
            Expr::FuncLit(e) => {
                self.open();
                self.signature(&mut e.ty.params, &mut e.ty.results);
                e.body.list.iter_mut().for_each(|s| self.stmt(s));
                self.close();
            }
            Expr::FuncType(e) => {
                self.open();
                self.signature(&mut e.params, &mut e.results);
                self.close();
            }
            Expr::Slice(e) => {
                self.expr(&mut e.x);
                for index in [&mut e.low, &mut e.high, &mut e.max].into_iter().flatten() {
                    self.expr(index);
                }
            }
            Expr::TypeAssert(e) => {
                self.expr(&mut e.x);
                if let Some(ty) = &mut e.ty {
                    self.expr(ty);
                }
            }
            Expr::Ellipsis(e) => {
                if let Some(elt) = &mut e.elt {
                    self.expr(elt);
                }
            }
            Expr::InterfaceType(e) => {
                self.open();
                self.fields(&mut e.methods, ObjKind::Fun);
                self.close();
            }
        }
    }
}

fn decl_kind(tok: DeclTok) -> ObjKind {
    match tok {
        DeclTok::Var => ObjKind::Var,
        DeclTok::Const => ObjKind::Con,
        DeclTok::Type => ObjKind::Typ,
    }
}
