// Stack machine code generator: walks each statement's expression tree in
// post-order and emits x86-64 that keeps every intermediate value on the
// hardware stack.
use log::debug;

use crate::assembly;
use crate::compiler::ast::{BinaryOperator, Expression, LocalVar, Program, WORD_SIZE};
use crate::compiler::x86::assembly::*;

/// Number of variable slots that are always reserved in the stack frame,
/// one for every possible single letter variable name.
const MIN_VAR_SLOTS: u32 = 26;

/// The frame must keep the stack pointer 16 byte aligned.
const FRAME_ALIGN: u32 = 16;

pub struct Compiler {
    code: Vec<Inst>,
}

impl Compiler {
    pub fn print(&self, output: &mut dyn std::io::Write) -> std::io::Result<()> {
        for inst in self.code.iter() {
            writeln!(output, "{}", inst)?;
        }
        Ok(())
    }

    pub fn code(&self) -> &[Inst] {
        &self.code
    }

    pub fn compile(program: &Program) -> Compiler {
        let mut code = vec![];
        let frame = Compiler::frame_size(program) as i64;

        assembly! {(code) {
            intel_syntax noprefix;
            global main;
        @main:
            push %rbp;
            mov %rbp, %rsp;
            sub %rsp, {frame};
        }};

        for (idx, stmt) in program.statements().iter().enumerate() {
            debug!("Compiling statement {}: {}", idx, stmt);
            Compiler::traverse(stmt, &mut code);

            // The statement's value is left on the stack.  The last one
            // becomes the program's return value.
            assembly! {(code) {
                pop %rax;
            }};
        }

        assembly! {(code) {
            mov %rsp, %rbp;
            pop %rbp;
            ret;
        }};

        debug!("Generated {} instructions", code.len());
        Compiler { code }
    }

    /// Bytes reserved below the frame pointer for local variables.
    pub fn frame_size(program: &Program) -> u32 {
        let slots = std::cmp::max(MIN_VAR_SLOTS, program.vars().len() as u32);
        let size = slots * WORD_SIZE;
        (size + FRAME_ALIGN - 1) / FRAME_ALIGN * FRAME_ALIGN
    }

    /// Emits the code for `exp`.  When the emitted code runs it pushes
    /// exactly one value: the value of `exp`.
    fn traverse(exp: &Expression, code: &mut Vec<Inst>) {
        match exp {
            Expression::Integer(_, i) => Compiler::integer(*i, code),
            Expression::Variable(_, var) => {
                Compiler::address_of(*var, code);
                assembly! {(code) {
                    pop %rax;
                    mov %rax, [%rax];
                    push %rax;
                }};
            }
            Expression::Assign(_, left, right) => {
                match left.as_ref() {
                    Expression::Variable(_, var) => Compiler::address_of(*var, code),
                    _ => panic!(
                        "CRITICAL: left side of an assignment is not a variable: {}",
                        left
                    ),
                }
                Compiler::traverse(right, code);
                assembly! {(code) {
                    pop %rdi;
                    pop %rax;
                    mov [%rax], %rdi;
                    push %rdi;
                }};
            }
            Expression::BinaryOp(_, op, left, right) => {
                Compiler::traverse(left, code);
                Compiler::traverse(right, code);
                assembly! {(code) {
                    pop %rdi;
                    pop %rax;
                }};
                Compiler::binary_op(*op, code);
                assembly! {(code) {
                    push %rax;
                }};
            }
        }
    }

    /// Pushes an integer literal.  `push` only takes a sign extended 32 bit
    /// immediate so wider values go through `rax`.
    fn integer(i: i64, code: &mut Vec<Inst>) {
        if i32::MIN as i64 <= i && i <= i32::MAX as i64 {
            assembly! {(code) {
                push {i};
            }};
        } else {
            assembly! {(code) {
                mov %rax, {i};
                push %rax;
            }};
        }
    }

    /// Pushes the address of a local variable's slot.
    fn address_of(var: LocalVar, code: &mut Vec<Inst>) {
        let offset = var.offset() as i64;
        assembly! {(code) {
            mov %rax, %rbp;
            sub %rax, {offset};
            push %rax;
        }};
    }

    /// Combines the left operand in `rax` with the right operand in `rdi`
    /// and leaves the result in `rax`.
    fn binary_op(op: BinaryOperator, code: &mut Vec<Inst>) {
        match op {
            BinaryOperator::Add => {
                assembly! {(code) {
                    add %rax, %rdi;
                }}
            }
            BinaryOperator::Sub => {
                assembly! {(code) {
                    sub %rax, %rdi;
                }}
            }
            BinaryOperator::Mul => {
                assembly! {(code) {
                    imul %rax, %rdi;
                }}
            }
            BinaryOperator::Div => {
                assembly! {(code) {
                    cqo;
                    idiv %rdi;
                }}
            }
            BinaryOperator::Eq => {
                assembly! {(code) {
                    cmp %rax, %rdi;
                    sete %al;
                    movzx %rax, %al;
                }}
            }
            BinaryOperator::NEq => {
                assembly! {(code) {
                    cmp %rax, %rdi;
                    setne %al;
                    movzx %rax, %al;
                }}
            }
            BinaryOperator::Ls => {
                assembly! {(code) {
                    cmp %rax, %rdi;
                    setl %al;
                    movzx %rax, %al;
                }}
            }
            BinaryOperator::LsEq => {
                assembly! {(code) {
                    cmp %rax, %rdi;
                    setle %al;
                    movzx %rax, %al;
                }}
            }
        }
    }
}
