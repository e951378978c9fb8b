// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::attributes::AttrValue;
use crate::command::Value;
use crate::error::{Error, Result};
use crate::expansion::expand_custom_template;
use crate::namespace::{is_environment_key, RoutingNamespace};

use super::ast::{Callee, Expr, Stmt};

#[cfg(test)]
#[path = "./eval_test.rs"]
mod eval_test;

fn eval_expr(expr: &Expr, ns: &RoutingNamespace) -> Result<Value> {
    match expr {
        Expr::Str(s) => Ok(Value::Scalar(s.clone())),
        Expr::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match eval_expr(item, ns)? {
                    Value::Scalar(s) => out.push(s),
                    Value::Sequence(_) => {
                        return Err(Error::ParseError {
                            offset: 0,
                            message: "nested sequences are not supported".to_owned(),
                        })
                    }
                }
            }
            Ok(Value::Sequence(out))
        }
        Expr::Ident(name) => {
            let locals = ns.locals();
            let found = locals.borrow().get(name)?;
            Value::try_from(found).map_err(|_| Error::UndefinedCallable(name.clone()))
        }
    }
}

/// Dispatch a free function call to the matching [`crate::recorder::Recorder`]
/// method. This is the dispatch table the design notes call for: one place
/// mapping kind name to behavior, shared conceptually with the interpreter
/// side's kind -> render method tables in `rex-interp`.
fn as_key(value: Value, function: &str) -> Result<String> {
    match value {
        Value::Scalar(s) => Ok(s),
        Value::Sequence(_) => Err(Error::Arity {
            function: function.to_owned(),
            expected: 2,
            got: 2,
        }),
    }
}

fn call_function(name: &str, args: &[Expr], ns: &RoutingNamespace) -> Result<()> {
    let mut values = Vec::with_capacity(args.len());
    for a in args {
        values.push(eval_expr(a, ns)?);
    }
    let check_arity = |expected: usize| -> Result<()> {
        if values.len() != expected {
            return Err(Error::Arity {
                function: name.to_owned(),
                expected,
                got: values.len(),
            });
        }
        Ok(())
    };
    let recorder = ns.recorder();
    match name {
        "setenv" | "prependenv" | "appendenv" | "alias" => {
            check_arity(2)?;
            let mut values = values;
            let value = values.pop().unwrap();
            let key = as_key(values.pop().unwrap(), name)?;
            let mut recorder = recorder.borrow_mut();
            match name {
                "setenv" => recorder.setenv(key, value),
                "prependenv" => recorder.prependenv(key, value),
                "appendenv" => recorder.appendenv(key, value),
                "alias" => recorder.alias(key, value),
                _ => unreachable!(),
            }
        }
        "unsetenv" => {
            check_arity(1)?;
            let key = as_key(values.into_iter().next().unwrap(), name)?;
            recorder.borrow_mut().unsetenv(key);
        }
        "info" | "error" | "comment" | "source" | "command" => {
            check_arity(1)?;
            let value = values.into_iter().next().unwrap();
            let mut recorder = recorder.borrow_mut();
            match name {
                "info" => recorder.info(value),
                "error" => recorder.error(value),
                "comment" => recorder.comment(value),
                "source" => recorder.source(value),
                "command" => recorder.command(value),
                _ => unreachable!(),
            }
        }
        other => return Err(Error::UndefinedCallable(other.to_owned())),
    }
    Ok(())
}

fn call_method(target: &str, method: &str, args: &[Expr], ns: &RoutingNamespace) -> Result<()> {
    if !is_environment_key(target) {
        return Err(Error::UndefinedCallable(format!("{target}.{method}")));
    }
    let handle = ns.env_handle(target);
    match method {
        "set" => {
            let [value] = one_arg(args, ns, "set")?;
            handle.set(value);
        }
        "prepend" => {
            let [value] = one_arg(args, ns, "prepend")?;
            handle.prepend(value);
        }
        "append" => {
            let [value] = one_arg(args, ns, "append")?;
            handle.append(value);
        }
        "unset" => {
            if !args.is_empty() {
                return Err(Error::Arity {
                    function: "unset".to_owned(),
                    expected: 0,
                    got: args.len(),
                });
            }
            handle.unset();
        }
        other => return Err(Error::UndefinedCallable(format!("{target}.{other}"))),
    }
    Ok(())
}

fn one_arg(args: &[Expr], ns: &RoutingNamespace, name: &str) -> Result<[Value; 1]> {
    if args.len() != 1 {
        return Err(Error::Arity {
            function: name.to_owned(),
            expected: 1,
            got: args.len(),
        });
    }
    Ok([eval_expr(&args[0], ns)?])
}

fn assign(name: &str, expr: &Expr, ns: &RoutingNamespace) -> Result<()> {
    if is_environment_key(name) {
        // Sugar for `NAME.set(value)`; expansion happens inside the
        // recorder when the value becomes a Command argument, not here.
        let value = eval_expr(expr, ns)?;
        ns.env_handle(name).set(value);
        return Ok(());
    }

    // Local variable: expand against the current custom namespace *before*
    // storing, so later `!name` references see the resolved value.
    let raw = eval_expr(expr, ns)?;
    let locals = ns.locals();
    let expanded = {
        let locals_ref = locals.borrow();
        match raw {
            Value::Scalar(s) => AttrValue::Str(expand_custom_template(&s, &locals_ref)),
            Value::Sequence(items) => AttrValue::Sequence(
                items
                    .iter()
                    .map(|s| expand_custom_template(s, &locals_ref))
                    .collect(),
            ),
        }
    };
    locals.borrow_mut().insert(name, expanded)?;
    Ok(())
}

/// Execute a parsed script's statements in order against `ns`, mutating its
/// recorder and locals. One pass, left to right, no reordering.
pub fn exec(stmts: &[Stmt], ns: &RoutingNamespace) -> Result<()> {
    for stmt in stmts {
        match stmt {
            Stmt::Comment(_) => {}
            Stmt::Assign { name, value } => assign(name, value, ns)?,
            Stmt::Call { callee, args } => match callee {
                Callee::Function(name) => call_function(name, args, ns)?,
                Callee::Method { target, method } => call_method(target, method, args, ns)?,
            },
        }
    }
    Ok(())
}
