//! Main generator implementation.

use crate::error::{CompileError, CompileResult};
use crate::output::{MolecularProgram, OutputBlock};
use crate::value::Value;
use operon_parser::{
    parse, ChainExpr, ChainOp, CompareExpr, CompareOp, Expr, Program, Span, Stmt, SymbolTable,
};
use operon_registry::{builtin, Operator, Registry, RegistryError};

/// The Generator walks parsed statements, evaluates every expression
/// against the symbol table, and resolves each comparison or chain
/// through the registry into an output block.
pub struct Generator<'a> {
    registry: &'a Registry,
    symbols: &'a SymbolTable,
    blocks: Vec<OutputBlock>,
}

impl<'a> Generator<'a> {
    /// Create a generator over a registry and a populated symbol table.
    pub fn new(registry: &'a Registry, symbols: &'a SymbolTable) -> Self {
        Self {
            registry,
            symbols,
            blocks: Vec::new(),
        }
    }

    /// Walk the statements and collect their output blocks in
    /// traversal order.
    pub fn generate(mut self, stmts: &[Stmt]) -> CompileResult<MolecularProgram> {
        for stmt in stmts {
            self.gen_stmt(stmt)?;
        }
        Ok(MolecularProgram {
            blocks: self.blocks,
        })
    }

    fn gen_stmt(&mut self, stmt: &Stmt) -> CompileResult<()> {
        match stmt {
            // Bindings were recorded during parsing; nothing to emit.
            Stmt::Assign(_) => Ok(()),
            Stmt::Expr(stmt) => {
                let value = self.eval(&stmt.expr)?;
                value.as_bool().ok_or_else(|| {
                    CompileError::type_error("a truth value", value.type_name(), stmt.expr.span())
                })?;
                Ok(())
            }
            Stmt::If(stmt) => {
                let test = self.eval(&stmt.test)?;
                let truth = test.as_bool().ok_or_else(|| {
                    CompileError::type_error("a truth value", test.type_name(), stmt.test.span())
                })?;
                let branch = if truth {
                    &stmt.then_branch
                } else {
                    &stmt.else_branch
                };
                for stmt in branch {
                    self.gen_stmt(stmt)?;
                }
                Ok(())
            }
        }
    }

    /// Evaluate an expression post-order, emitting a block for every
    /// comparison and chain it contains.
    fn eval(&mut self, expr: &Expr) -> CompileResult<Value> {
        match expr {
            Expr::Ref(reference) => {
                let value = self
                    .symbols
                    .value(&reference.name)
                    .ok_or_else(|| {
                        CompileError::undefined_binding(&reference.name, reference.span)
                    })?;
                Ok(Value::Seq(value.to_string()))
            }
            Expr::Compare(compare) => self.eval_compare(compare),
            Expr::Chain(chain) => self.eval_chain(chain),
        }
    }

    fn eval_compare(&mut self, compare: &CompareExpr) -> CompileResult<Value> {
        let left = self.eval(&compare.left)?;
        let right = self.eval(&compare.right)?;
        let left_seq = left.as_seq().ok_or_else(|| {
            CompileError::type_error("a sequence", left.type_name(), compare.left.span())
        })?;
        let right_seq = right.as_seq().ok_or_else(|| {
            CompileError::type_error("a sequence", right.type_name(), compare.right.span())
        })?;
        let truth = match compare.op {
            CompareOp::Eq => left_seq == right_seq,
            CompareOp::NotEq => left_seq != right_seq,
        };
        let operator = match compare.op {
            CompareOp::Eq => Operator::Eq,
            CompareOp::NotEq => Operator::NotEq,
        };
        self.emit(operator, truth, compare.span)?;
        Ok(Value::Bool(truth))
    }

    fn eval_chain(&mut self, chain: &ChainExpr) -> CompileResult<Value> {
        // Every operand is evaluated before the fold; a decided result
        // does not skip the blocks of the remaining operands.
        let mut truths = Vec::with_capacity(chain.operands.len());
        for operand in &chain.operands {
            let value = self.eval(operand)?;
            let truth = value.as_bool().ok_or_else(|| {
                CompileError::type_error("a truth value", value.type_name(), operand.span())
            })?;
            truths.push(truth);
        }
        let truth = match chain.op {
            ChainOp::And => truths.iter().all(|&t| t),
            ChainOp::Or => truths.iter().any(|&t| t),
        };
        let operator = match chain.op {
            ChainOp::And => Operator::And,
            ChainOp::Or => Operator::Or,
        };
        self.emit(operator, truth, chain.span)?;
        Ok(Value::Bool(truth))
    }

    fn emit(&mut self, operator: Operator, truth: bool, span: Span) -> CompileResult<()> {
        let rule = self
            .registry
            .rule(operator, truth)
            .ok_or_else(|| CompileError::unsupported_operator(operator, truth, span))?;
        let enzyme = self.registry.operation(&rule.operation).ok_or_else(|| {
            CompileError::Registry(RegistryError::MissingOperation(rule.operation.clone()))
        })?;
        self.blocks.push(OutputBlock {
            operator,
            truth,
            template: rule.template.clone(),
            enzyme: enzyme.clone(),
            code: rule.code.clone(),
        });
        Ok(())
    }
}

/// Generate output blocks for an already-parsed program.
pub fn generate(program: &Program, registry: &Registry) -> CompileResult<MolecularProgram> {
    Generator::new(registry, &program.symbols).generate(&program.stmts)
}

/// Compile source text against a caller-supplied registry.
pub fn compile_with(source: &str, registry: &Registry) -> CompileResult<MolecularProgram> {
    let program = parse(source)?;
    generate(&program, registry)
}

/// Compile source text against the built-in registry.
pub fn compile_to_program(source: &str) -> CompileResult<MolecularProgram> {
    compile_with(source, builtin())
}

/// Compile source text against the built-in registry and render it.
pub fn compile(source: &str) -> CompileResult<String> {
    Ok(compile_to_program(source)?.render())
}
