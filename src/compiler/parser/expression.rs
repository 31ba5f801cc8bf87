use crate::compiler::{
    ast::{BinaryOperator, Expression},
    lexer::tokens::{Lex, Token},
    CompilerError,
};

use super::{parser::Parser, ParserError, ParserResult};

impl Expression {
    /// Builds the node for the binary operator `op`.  `>` and `>=` have no
    /// node of their own: they become `<` and `<=` with the operands swapped.
    pub(super) fn binary_op(
        op: &Token,
        left: Expression,
        right: Expression,
    ) -> ParserResult<Expression> {
        let span = left.span().cover(right.span());
        let (op, left, right) = match op.sym {
            Lex::Add => (BinaryOperator::Add, left, right),
            Lex::Minus => (BinaryOperator::Sub, left, right),
            Lex::Mul => (BinaryOperator::Mul, left, right),
            Lex::Div => (BinaryOperator::Div, left, right),
            Lex::Ls => (BinaryOperator::Ls, left, right),
            Lex::LsEq => (BinaryOperator::LsEq, left, right),
            Lex::Gr => (BinaryOperator::Ls, right, left),
            Lex::GrEq => (BinaryOperator::LsEq, right, left),
            Lex::Eq => (BinaryOperator::Eq, left, right),
            Lex::NEq => (BinaryOperator::NEq, left, right),
            sym => {
                return err!(
                    op.span,
                    ParserError::ExpectedButFound(
                        vec![
                            Lex::Add,
                            Lex::Minus,
                            Lex::Mul,
                            Lex::Div,
                            Lex::Ls,
                            Lex::LsEq,
                            Lex::Gr,
                            Lex::GrEq,
                            Lex::Eq,
                            Lex::NEq
                        ],
                        sym
                    )
                )
            }
        };

        Ok(Expression::BinaryOp(span, op, Box::new(left), Box::new(right)))
    }
}

pub(super) fn expression(p: &mut Parser) -> ParserResult<Expression> {
    trace!(p);
    assignment(p)
}

/// Assignment is right associative, so `a = b = 1` stores 1 into `b` and
/// then stores the result of that into `a`.
fn assignment(p: &mut Parser) -> ParserResult<Expression> {
    trace!(p);
    let left = equality(p)?;

    match p.stream.next_if(&Lex::Assign) {
        Some(_) => {
            if !left.is_lvalue() {
                return err!(left.span(), ParserError::InvalidAssignTarget);
            }

            let right = assignment(p)?;
            let span = left.span().cover(right.span());
            Ok(Expression::Assign(span, Box::new(left), Box::new(right)))
        }
        None => Ok(left),
    }
}

fn equality(p: &mut Parser) -> ParserResult<Expression> {
    trace!(p);
    binary_op(p, &[Lex::Eq, Lex::NEq], relational)
}

fn relational(p: &mut Parser) -> ParserResult<Expression> {
    trace!(p);
    binary_op(p, &[Lex::Ls, Lex::LsEq, Lex::Gr, Lex::GrEq], additive)
}

fn additive(p: &mut Parser) -> ParserResult<Expression> {
    trace!(p);
    binary_op(p, &[Lex::Add, Lex::Minus], multiplicative)
}

fn multiplicative(p: &mut Parser) -> ParserResult<Expression> {
    trace!(p);
    binary_op(p, &[Lex::Mul, Lex::Div], unary)
}

/// Parses a left associative chain of operands separated by any of the
/// operators in `test`.
fn binary_op(
    p: &mut Parser,
    test: &[Lex],
    operand: fn(&mut Parser) -> ParserResult<Expression>,
) -> ParserResult<Expression> {
    let mut left = operand(p)?;

    while let Some(op) = p.stream.next_if_one_of(test) {
        let right = operand(p)?;
        left = Expression::binary_op(&op, left, right)?;
    }

    Ok(left)
}

/// Unary plus is dropped and unary minus becomes `0 - operand`.
fn unary(p: &mut Parser) -> ParserResult<Expression> {
    trace!(p);
    match p.stream.next_if_one_of(&[Lex::Add, Lex::Minus]) {
        Some(op) => {
            let operand = primary(p).map_err(|err| match err.take() {
                (span, ParserError::ExpectedTerm(found)) => {
                    CompilerError::new(span, ParserError::ExpectedTermAfter(op.sym, found))
                }
                (span, inner) => CompilerError::new(span, inner),
            })?;

            match op.sym {
                Lex::Minus => {
                    let zero = Expression::Integer(op.span, 0);
                    Expression::binary_op(&op, zero, operand)
                }
                _ => Ok(operand),
            }
        }
        None => primary(p),
    }
}

fn primary(p: &mut Parser) -> ParserResult<Expression> {
    trace!(p);
    if p.stream.next_if(&Lex::LParen).is_some() {
        let exp = expression(p)?;
        p.stream.next_must_be(&Lex::RParen)?;
        return Ok(exp);
    }

    let token = p.stream.peek().clone();
    match token.sym {
        Lex::Integer(i) => {
            p.stream.next();
            Ok(Expression::Integer(token.span, i))
        }
        Lex::Identifier(id) => {
            p.stream.next();
            let var = p.vars.find_or_insert(&id.to_string());
            Ok(Expression::Variable(token.span, var))
        }
        found => err!(token.span, ParserError::ExpectedTerm(found)),
    }
}
