//! A tiny interpreter for the straight line subset of x86-64 that the code
//! generator emits.  Tests use it to check what a compiled program computes
//! without needing an assembler.

use std::collections::HashMap;

use super::assembly::{DirectOperand, Inst, Operand, Reg, Reg64, Reg8};

const STACK_TOP: i64 = 0x7fff_0000;

pub struct Machine {
    regs: HashMap<Reg64, i64>,
    memory: HashMap<i64, i64>,
    flags: (i64, i64),
}

impl Machine {
    pub fn new() -> Machine {
        let mut regs = HashMap::new();
        regs.insert(Reg64::Rsp, STACK_TOP);
        Machine {
            regs,
            memory: HashMap::new(),
            flags: (0, 0),
        }
    }

    /// Runs `code` until `ret` pops the caller's return address and
    /// returns the value left in `rax`.  Panics if the stack pointer is
    /// not back where it started when `ret` is reached.
    pub fn run(code: &[Inst]) -> i64 {
        let mut m = Machine::new();
        // Return address pushed by the caller of `main`.
        m.push(-1);

        for inst in code {
            if let Inst::Ret = inst {
                let ret = m.pop();
                assert_eq!(ret, -1, "ret did not find the return address");
                assert_eq!(m.reg(Reg64::Rsp), STACK_TOP, "unbalanced stack");
                return m.reg(Reg64::Rax);
            }
            m.step(inst);
        }

        panic!("Program ended without ret")
    }

    pub fn reg(&self, r: Reg64) -> i64 {
        *self.regs.get(&r).unwrap_or(&0)
    }

    fn set_reg(&mut self, r: Reg64, v: i64) {
        self.regs.insert(r, v);
    }

    fn push(&mut self, v: i64) {
        let rsp = self.reg(Reg64::Rsp) - 8;
        self.set_reg(Reg64::Rsp, rsp);
        self.memory.insert(rsp, v);
    }

    fn pop(&mut self) -> i64 {
        let rsp = self.reg(Reg64::Rsp);
        let v = *self
            .memory
            .get(&rsp)
            .unwrap_or_else(|| panic!("Pop from uninitialized stack at {:#x}", rsp));
        self.set_reg(Reg64::Rsp, rsp + 8);
        v
    }

    fn address(&self, op: &Operand) -> i64 {
        match op {
            Operand::Memory(DirectOperand::Register(Reg::R64(r))) => self.reg(*r),
            Operand::MemoryAddr(Reg::R64(r), d) => self.reg(*r) + *d as i64,
            _ => panic!("Unsupported memory operand: {}", op),
        }
    }

    fn read(&self, op: &Operand) -> i64 {
        match op {
            Operand::Direct(DirectOperand::Integer(i)) => *i,
            Operand::Direct(DirectOperand::Register(Reg::R64(r))) => self.reg(*r),
            Operand::Direct(DirectOperand::Register(Reg::R8(Reg8::Al))) => {
                self.reg(Reg64::Rax) & 0xff
            }
            Operand::Memory(_) | Operand::MemoryAddr(..) => {
                let addr = self.address(op);
                *self
                    .memory
                    .get(&addr)
                    .unwrap_or_else(|| panic!("Read of uninitialized memory at {:#x}", addr))
            }
        }
    }

    fn write(&mut self, op: &Operand, v: i64) {
        match op {
            Operand::Direct(DirectOperand::Register(Reg::R64(r))) => self.set_reg(*r, v),
            Operand::Memory(_) | Operand::MemoryAddr(..) => {
                let addr = self.address(op);
                self.memory.insert(addr, v);
            }
            _ => panic!("Cannot write to operand: {}", op),
        }
    }

    fn set_al(&mut self, b: bool) {
        let rax = self.reg(Reg64::Rax) & !0xff;
        self.set_reg(Reg64::Rax, rax | b as i64);
    }

    fn step(&mut self, inst: &Inst) {
        use Inst::*;
        match inst {
            Comment(_) | IntelSyntax | Global(_) | Label(_) => (),
            Push(a) => {
                let v = self.read(a);
                self.push(v)
            }
            Pop(a) => {
                let v = self.pop();
                self.write(a, v)
            }
            Mov(a, b) | Movzx(a, b) => {
                let v = self.read(b);
                self.write(a, v)
            }
            Add(a, b) => {
                let v = self.read(a).wrapping_add(self.read(b));
                self.write(a, v)
            }
            Sub(a, b) => {
                let v = self.read(a).wrapping_sub(self.read(b));
                self.write(a, v)
            }
            IMul(a, b) => {
                let v = self.read(a).wrapping_mul(self.read(b));
                self.write(a, v)
            }
            Cqo => {
                let rdx = if self.reg(Reg64::Rax) < 0 { -1 } else { 0 };
                self.set_reg(Reg64::Rdx, rdx)
            }
            IDiv(r) => {
                let dividend = self.reg(Reg64::Rax);
                let divisor = self.reg(*r);
                assert_ne!(divisor, 0, "Division by zero");
                self.set_reg(Reg64::Rax, dividend.wrapping_div(divisor));
                self.set_reg(Reg64::Rdx, dividend.wrapping_rem(divisor));
            }
            Cmp(a, b) => self.flags = (self.read(a), self.read(b)),
            Sete(_) => self.set_al(self.flags.0 == self.flags.1),
            Setne(_) => self.set_al(self.flags.0 != self.flags.1),
            Setl(_) => self.set_al(self.flags.0 < self.flags.1),
            Setle(_) => self.set_al(self.flags.0 <= self.flags.1),
            Ret => unreachable!(),
        }
    }
}
