use std::num::ParseFloatError;

use tracing::{debug, trace};

use crate::error::{Reason, TranslateError};
use crate::parser::{
    ast::{self, LitKind, ObjKind},
    dump, print, Dump, Filter, SourceMap,
};
use crate::{CharLiterals, Config};

use super::tree::{
    Application, BinaryOp, Expr, FuncBody, FuncDecl, FuncName, Import, Module, Operator, Param,
    TopLevel, Type,
};
use super::Result;

/// Converts Go syntax trees into Fun syntax trees.
///
/// Every method either returns a complete node or the first error found.
#[derive(Clone, Copy)]
pub struct Translator<'a> {
    /// Resolves positions in diagnostics
    files: &'a SourceMap,
    config: &'a Config,
}

impl<'a> Translator<'a> {
    pub fn new(files: &'a SourceMap, config: &'a Config) -> Self {
        Self { files, config }
    }

    pub fn module(&self, file: &ast::File<'_>) -> Result<Module> {
        trace!(name = file.name.name, "translating module");

        let imports = file
            .imports
            .iter()
            .map(|spec| self.import(spec))
            .collect::<Result<_>>()?;

        let mut top_levels = vec![];
        for decl in file.decls.iter() {
            match decl {
                ast::Decl::Func(f) => top_levels.push(TopLevel::FuncDecl(self.function(f)?)),
                ast::Decl::Gen(_) if self.config.strict_top_levels => {
                    return Err(self.unsupported(Reason::UnsupportedTopLevel, decl));
                }
                ast::Decl::Gen(g) => debug!(tok = g.tok.as_str(), "skipping top-level declaration"),
            }
        }

        Ok(Module {
            name: file.name.name.to_string(),
            imports,
            top_levels,
        })
    }

    pub fn import(&self, spec: &ast::ImportSpec<'_>) -> Result<Import> {
        if let Some(alias) = &spec.name {
            return Err(self.unsupported(Reason::ImportAlias, alias));
        }

        match self.expression(&spec.path)? {
            Expr::StringLit(path) => Ok(Import { path }),
            _ => Err(self.unsupported(Reason::NotStringLiteral, &spec.path)),
        }
    }

    pub fn function(&self, decl: &ast::FuncDecl<'_>) -> Result<FuncDecl> {
        trace!(name = decl.name.name, "translating function");
        if decl.recv.is_some() {
            // Fun has no methods, a method becomes a plain function of its other parameters
            debug!(name = decl.name.name, "dropping method receiver");
        }

        let mut params = vec![];
        for field in decl.params.list.iter() {
            let ty = self.atomic_type(&field.ty)?;
            params.extend(field.names.iter().map(|name| Param {
                name: name.name.to_string(),
                ty: ty.clone(),
            }));
        }

        let results = match &decl.results {
            Some(results) => results
                .list
                .iter()
                .map(|field| self.atomic_type(&field.ty))
                .collect::<Result<_>>()?,
            None => vec![],
        };

        let Some(body) = &decl.body else {
            return Err(self.unsupported(Reason::EmptyBody, decl));
        };

        let body = match body.list.as_slice() {
            [stmt] => FuncBody::Single(self.statement(stmt)?),
            list => {
                debug!(
                    name = decl.name.name,
                    statements = list.len(),
                    "keeping function body inline"
                );
                FuncBody::Inline(list.iter().map(|s| print::stmt(s, self.files)).collect())
            }
        };

        Ok(FuncDecl {
            name: decl.name.name.to_string(),
            params,
            results,
            body,
        })
    }

    pub fn statement(&self, stmt: &ast::Stmt<'_>) -> Result<Expr> {
        match stmt {
            ast::Stmt::Return(ret) => match ret.results.as_slice() {
                [] => Err(self.unsupported(Reason::EmptyResults, ret)),
                [result] => self.expression(result),
                results => results
                    .iter()
                    .map(|e| self.expression(e))
                    .collect::<Result<_>>()
                    .map(Expr::Results),
            },
            ast::Stmt::Expr(s) => self.expression(&s.x),
            _ => Err(self.unsupported(Reason::UnsupportedStmt, stmt)),
        }
    }

    pub fn expression(&self, expr: &ast::Expr<'_>) -> Result<Expr> {
        match expr {
            ast::Expr::Ident(ident) => match &ident.obj {
                Some(obj) if obj.kind == ObjKind::Var => Ok(Expr::Var(ident.name.to_string())),
                Some(obj) => Err(self.unsupported(Reason::UnsupportedObjKind, obj)),
                None => Err(self.unsupported(Reason::UnresolvedIdent, ident)),
            },
            ast::Expr::Binary(e) => {
                let x = self.expression(&e.x)?;
                let y = self.expression(&e.y)?;
                Ok(Expr::BinaryOp(BinaryOp {
                    x: Box::new(x),
                    op: Operator(e.op.as_str().to_string()),
                    y: Box::new(y),
                }))
            }
            ast::Expr::Selector(e) => match e.x.as_ref() {
                ast::Expr::Ident(pkg) => Ok(Expr::FuncName(FuncName(format!(
                    "{}.{}",
                    pkg.name, e.sel.name
                )))),
                base => Err(self.unsupported(Reason::UnsupportedArgument, base)),
            },
            ast::Expr::Call(e) => {
                let Expr::FuncName(name) = self.expression(&e.fun)? else {
                    return Err(self.unsupported(Reason::ExpectedFunction, e.fun.as_ref()));
                };
                let args = e
                    .args
                    .iter()
                    .map(|arg| self.expression(arg))
                    .collect::<Result<_>>()?;
                Ok(Expr::Application(Application { name, args }))
            }
            ast::Expr::BasicLit(lit) => self.literal(lit),
            _ => Err(self.unsupported(Reason::UnsupportedExpr, expr)),
        }
    }

    fn literal(&self, lit: &ast::BasicLit<'_>) -> Result<Expr> {
        match lit.kind {
            LitKind::Int => Ok(Expr::IntegerLit(lit.value.parse()?)),
            LitKind::Float => Ok(Expr::DoubleLit(float(lit.value)?)),
            LitKind::String => Ok(Expr::StringLit(unquote(lit.value).to_string())),
            LitKind::Char => {
                let content = lit
                    .value
                    .strip_prefix('\'')
                    .and_then(|v| v.strip_suffix('\''))
                    .unwrap_or(lit.value);
                let mut chars = content.chars();

                match (chars.next(), chars.next(), self.config.char_literals) {
                    (None, _, _) | (Some(_), Some(_), CharLiterals::Reject) => {
                        Err(self.unsupported(Reason::InvalidChar, lit))
                    }
                    (Some(c), _, _) => Ok(Expr::CharLit(c)),
                }
            }
            LitKind::Imag => Err(self.unsupported(Reason::UnexpectedLiteral, lit)),
        }
    }

    fn atomic_type(&self, ty: &ast::Expr<'_>) -> Result<Type> {
        match ty {
            ast::Expr::Ident(ident) => Ok(Type::Atomic(ident.name.to_string())),
            _ => Err(self.unsupported(Reason::UnsupportedType, ty)),
        }
    }

    fn unsupported(&self, reason: Reason, node: &dyn Dump) -> TranslateError {
        TranslateError::Unsupported {
            reason,
            dump: dump::render(self.files, node, Filter::NotEmpty),
        }
    }
}

/// Strip one pair of double quotes or backquotes. Escapes are kept as written.
fn unquote(value: &str) -> &str {
    ['"', '`']
        .into_iter()
        .find_map(|q| value.strip_prefix(q)?.strip_suffix(q))
        .unwrap_or(value)
}

/// Parse a Go float literal: digits may be separated with `_` and hex mantissas take a binary
/// exponent (`0x1p-2`).
fn float(value: &str) -> std::result::Result<f64, ParseFloatError> {
    let digits = value.replace('_', "");
    match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        // Rust does not read hex floats, the fallback only produces the error
        Some(hex) => hex_float(hex).map_or_else(|| value.parse(), Ok),
        None => digits.parse(),
    }
}

fn hex_float(hex: &str) -> Option<f64> {
    let (mantissa, exp) = hex.split_once(['p', 'P'])?;
    let exp: i32 = exp.parse().ok()?;
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int.is_empty() && frac.is_empty() {
        return None;
    }

    let mut value = 0f64;
    for c in int.chars().chain(frac.chars()) {
        value = value * 16.0 + f64::from(c.to_digit(16)?);
    }
    let frac_bits = i32::try_from(frac.len() * 4).ok()?;
    Some(value * 2f64.powi(exp - frac_bits))
}
