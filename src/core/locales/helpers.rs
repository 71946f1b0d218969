//! The narrow slice of the syntax tree the extractor understands.
//!
//! Only a handful of node kinds matter for reading a Starlight configuration,
//! so they are projected into small closed enums and matched directly instead
//! of walking the whole tree with a visitor.

use swc_common::Span;
use swc_ecma_ast::{
    ArrayLit, CallExpr, Callee, Decl, Expr, ImportDecl, Lit, ModuleDecl, ModuleItem, ObjectLit,
    Program, Prop, PropName, PropOrSpread, Stmt, VarDecl,
};

/// Value shapes recognized in configuration objects.
#[derive(Clone, Copy)]
pub enum Shape<'a> {
    Object(&'a ObjectLit),
    Array(&'a ArrayLit),
    Call(&'a CallExpr),
    Ident(&'a str),
    Str(&'a str),
    Other,
}

impl<'a> Shape<'a> {
    pub fn of(expr: &'a Expr) -> Self {
        match unwrap_parens(expr) {
            Expr::Object(obj) => Shape::Object(obj),
            Expr::Array(arr) => Shape::Array(arr),
            Expr::Call(call) => Shape::Call(call),
            Expr::Ident(ident) => Shape::Ident(ident.sym.as_str()),
            Expr::Lit(Lit::Str(s)) => s.value.as_str().map_or(Shape::Other, Shape::Str),
            _ => Shape::Other,
        }
    }
}

/// A `key: value` or shorthand property of an object literal.
///
/// `key` is `None` for computed and numeric keys, which never name anything
/// the extractor looks for.
pub struct Property<'a> {
    pub key: Option<&'a str>,
    pub value: Shape<'a>,
}

/// Top-level statement kinds that take part in resolution.
pub enum Statement<'a> {
    Import(&'a ImportDecl),
    /// A plain or exported variable declaration.
    Var(&'a VarDecl),
    /// `export default <expr>`; `None` for function and class declarations.
    DefaultExport(Option<&'a Expr>, Span),
    Other,
}

/// Parentheses carry no meaning for the recognized shapes.
fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        _ => expr,
    }
}

/// Identifier names and string literals are equally valid property keys.
fn prop_name(key: &PropName) -> Option<&str> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.as_str()),
        PropName::Str(s) => s.value.as_str(),
        _ => None,
    }
}

/// Iterate the key/value properties of an object, skipping spreads and methods.
pub fn properties(obj: &ObjectLit) -> impl Iterator<Item = Property<'_>> {
    obj.props.iter().filter_map(|prop| match prop {
        PropOrSpread::Prop(prop) => match &**prop {
            Prop::KeyValue(kv) => Some(Property {
                key: prop_name(&kv.key),
                value: Shape::of(&kv.value),
            }),
            Prop::Shorthand(ident) => Some(Property {
                key: Some(ident.sym.as_str()),
                value: Shape::Ident(ident.sym.as_str()),
            }),
            _ => None,
        },
        PropOrSpread::Spread(_) => None,
    })
}

/// Value of the first property named `name`.
pub fn find_property<'a>(obj: &'a ObjectLit, name: &str) -> Option<Shape<'a>> {
    properties(obj)
        .find(|property| property.key == Some(name))
        .map(|property| property.value)
}

/// First argument of a call, unless it is missing or spread.
pub fn first_argument(call: &CallExpr) -> Shape<'_> {
    match call.args.first() {
        Some(arg) if arg.spread.is_none() => Shape::of(&arg.expr),
        _ => Shape::Other,
    }
}

/// Name of a call's callee when it is a bare identifier.
pub fn callee_name(call: &CallExpr) -> Option<&str> {
    match &call.callee {
        Callee::Expr(expr) => match &**expr {
            Expr::Ident(ident) => Some(ident.sym.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// Top-level statements in source order, for modules and scripts alike.
pub fn statements(program: &Program) -> Vec<Statement<'_>> {
    match program {
        Program::Module(module) => module.body.iter().map(module_statement).collect(),
        Program::Script(script) => script.body.iter().map(script_statement).collect(),
    }
}

fn module_statement(item: &ModuleItem) -> Statement<'_> {
    match item {
        ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => Statement::Import(import),
        ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => match &export.decl {
            Decl::Var(var) => Statement::Var(var),
            _ => Statement::Other,
        },
        ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) => {
            Statement::DefaultExport(Some(&export.expr), export.span)
        }
        ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => {
            Statement::DefaultExport(None, export.span)
        }
        ModuleItem::ModuleDecl(_) => Statement::Other,
        ModuleItem::Stmt(stmt) => script_statement(stmt),
    }
}

fn script_statement(stmt: &Stmt) -> Statement<'_> {
    match stmt {
        Stmt::Decl(Decl::Var(var)) => Statement::Var(var),
        _ => Statement::Other,
    }
}
