use std::fmt::*;

/*
Assembly DSL
Registers are prefixed with %
Memory locations are within []
Each instruction is followed by a ;
Expressions to evaluate are in {}
Global labels are prefixed with @
```
let x = 8;
assembly!(
    (buffer) {
        intel_syntax noprefix;
        global main;
    @main:
        mov %rax, %rbp;
        sub %rax, {x};
        mov %rax, [%rax];
        push %rax;
        ret;
    }
)
```

would translate to (GNU assembler, Intel syntax):
```
.intel_syntax noprefix
.globl main

main:
    mov rax, rbp
    sub rax, 8
    mov rax, [rax]
    push rax
    ret
```

operand combinations:
binary:
%_, %_
%_, _
%_, [%_]
[%_], %_

unary:
%_
_
*/

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg8 {
    Al,
}

impl Display for Reg8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        use Reg8::*;
        match self {
            Al => f.write_str("al"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg64 {
    Rax,
    Rdx,
    Rdi,
    Rsp,
    Rbp,
}

impl Display for Reg64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        use Reg64::*;
        match self {
            Rax => f.write_str("rax"),
            Rdx => f.write_str("rdx"),
            Rdi => f.write_str("rdi"),
            Rsp => f.write_str("rsp"),
            Rbp => f.write_str("rbp"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg {
    R8(Reg8),
    R64(Reg64),
}

impl Display for Reg {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        use Reg::*;
        match self {
            R8(r8) => f.write_fmt(format_args!("{}", r8)),
            R64(r64) => f.write_fmt(format_args!("{}", r64)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DirectOperand {
    Integer(i64),
    Register(Reg),
}

impl Display for DirectOperand {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        use DirectOperand::*;
        match self {
            Integer(i) => f.write_fmt(format_args!("{}", i)),
            Register(reg) => f.write_fmt(format_args!("{}", reg)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Direct(DirectOperand),
    Memory(DirectOperand),
    MemoryAddr(Reg, i32),
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        use Operand::*;
        match self {
            Direct(d) => f.write_fmt(format_args!("{}", d)),
            Memory(mem) => f.write_fmt(format_args!("[{}]", mem)),
            MemoryAddr(mem, d) => {
                if *d < 0 {
                    f.write_fmt(format_args!("[{}-{}]", mem, -d))
                } else if *d > 0 {
                    f.write_fmt(format_args!("[{}+{}]", mem, d))
                } else {
                    f.write_fmt(format_args!("[{}]", mem))
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Inst {
    Comment(String),
    IntelSyntax,
    Global(String),
    Label(String),

    Ret,
    Cqo,

    Push(Operand),
    Pop(Operand),
    Mov(Operand, Operand),
    Movzx(Operand, Operand),

    Add(Operand, Operand),
    Sub(Operand, Operand),
    IMul(Operand, Operand),
    IDiv(Reg64),

    Cmp(Operand, Operand),

    Sete(Reg8),
    Setne(Reg8),
    Setl(Reg8),
    Setle(Reg8),
}

impl Display for Inst {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        use Inst::*;
        // Add separating newline?
        match self {
            Label(lbl) if !lbl.starts_with('.') => f.write_str("\n")?,
            _ => (),
        };

        // Indent instruction?
        match self {
            Label(_) | IntelSyntax | Global(_) => (),
            _ => f.write_str("    ")?,
        };

        match self {
            Comment(comment) => f.write_fmt(format_args!("# {}", comment)),
            IntelSyntax => f.write_str(".intel_syntax noprefix"),
            Global(global) => f.write_fmt(format_args!(".globl {}", global)),
            Label(lbl) => f.write_fmt(format_args!("{}:", lbl)),

            Ret => f.write_str("ret"),
            Cqo => f.write_str("cqo"),

            Push(a) => f.write_fmt(format_args!("push {}", a)),
            Pop(a) => f.write_fmt(format_args!("pop {}", a)),
            Mov(a, b) => f.write_fmt(format_args!("mov {}, {}", a, b)),
            Movzx(a, b) => f.write_fmt(format_args!("movzx {}, {}", a, b)),

            Add(a, b) => f.write_fmt(format_args!("add {}, {}", a, b)),
            Sub(a, b) => f.write_fmt(format_args!("sub {}, {}", a, b)),
            IMul(a, b) => f.write_fmt(format_args!("imul {}, {}", a, b)),
            IDiv(a) => f.write_fmt(format_args!("idiv {}", a)),
            Cmp(a, b) => f.write_fmt(format_args!("cmp {}, {}", a, b)),

            Sete(a) => f.write_fmt(format_args!("sete {}", a)),
            Setne(a) => f.write_fmt(format_args!("setne {}", a)),
            Setl(a) => f.write_fmt(format_args!("setl {}", a)),
            Setle(a) => f.write_fmt(format_args!("setle {}", a)),
        }
    }
}

#[macro_export]
macro_rules! unit_op {
    (ret) => {
        $crate::compiler::x86::assembly::Inst::Ret
    };
    (cqo) => {
        $crate::compiler::x86::assembly::Inst::Cqo
    };
}

#[macro_export]
macro_rules! unary_op {
    (push) => {
        $crate::compiler::x86::assembly::Inst::Push
    };
    (pop) => {
        $crate::compiler::x86::assembly::Inst::Pop
    };
}

#[macro_export]
macro_rules! binary_op {
    (mov) => {
        $crate::compiler::x86::assembly::Inst::Mov
    };
    (movzx) => {
        $crate::compiler::x86::assembly::Inst::Movzx
    };
    (add) => {
        $crate::compiler::x86::assembly::Inst::Add
    };
    (sub) => {
        $crate::compiler::x86::assembly::Inst::Sub
    };
    (imul) => {
        $crate::compiler::x86::assembly::Inst::IMul
    };
    (cmp) => {
        $crate::compiler::x86::assembly::Inst::Cmp
    };
}

#[macro_export]
macro_rules! reg8 {
    (al) => {
        $crate::compiler::x86::assembly::Reg8::Al
    };
}

#[macro_export]
macro_rules! reg64 {
    (rax) => {
        $crate::compiler::x86::assembly::Reg64::Rax
    };
    (rdx) => {
        $crate::compiler::x86::assembly::Reg64::Rdx
    };
    (rdi) => {
        $crate::compiler::x86::assembly::Reg64::Rdi
    };
    (rsp) => {
        $crate::compiler::x86::assembly::Reg64::Rsp
    };
    (rbp) => {
        $crate::compiler::x86::assembly::Reg64::Rbp
    };
}

#[macro_export]
macro_rules! register {
    (al) => {
        $crate::compiler::x86::assembly::Reg::R8($crate::reg8!(al))
    };
    ($r:tt) => {
        $crate::compiler::x86::assembly::Reg::R64($crate::reg64!($r))
    };
}

#[macro_export]
macro_rules! operand {
    // memory
    ([%$reg:tt-$d:literal]) => {
        $crate::compiler::x86::assembly::Operand::MemoryAddr($crate::register!($reg), -$d)
    };
    ([%$reg:tt-{$e:expr}]) => {
        $crate::compiler::x86::assembly::Operand::MemoryAddr($crate::register!($reg), -$e)
    };
    ([%$e:tt]) => {
        $crate::compiler::x86::assembly::Operand::Memory(
            $crate::compiler::x86::assembly::DirectOperand::Register($crate::register!($e)),
        )
    };
    ({$e:expr}) => {
        $crate::compiler::x86::assembly::Operand::Direct(
            $crate::compiler::x86::assembly::DirectOperand::Integer($e),
        )
    };

    // register
    (%{$reg:expr}) => {
        $crate::compiler::x86::assembly::Operand::Direct(
            $crate::compiler::x86::assembly::DirectOperand::Register($reg),
        )
    };
    (%$reg:tt) => {
        $crate::compiler::x86::assembly::Operand::Direct(
            $crate::compiler::x86::assembly::DirectOperand::Register($crate::register!($reg)),
        )
    };
    ($e:literal) => {
        $crate::compiler::x86::assembly::Operand::Direct(
            $crate::compiler::x86::assembly::DirectOperand::Integer($e),
        )
    };
}

#[macro_export]
macro_rules! assembly {
    (($buf:expr) {}) => {
    };

    /********************/
    /*  MACRO OPERATIONS */
    /********************/
    // Append another set of instructions
    (($buf:expr) {{{$is:expr}} $($tail:tt)*}) => {
        for inst in $is.iter() {
            $buf.push(inst.clone());
        }
        $crate::assembly!(($buf) {$($tail)*})
    };

    /********************/
    /*     COMMENTS       */
    /********************/
    (($buf:expr) {;$comment:literal $($tail:tt)*}) => {
        $buf.push($crate::compiler::x86::assembly::Inst::Comment($comment.into()));
        $crate::assembly!(($buf) {$($tail)*})
    };
    (($buf:expr) {;{$comment:expr} $($tail:tt)*}) => {
        $buf.push($crate::compiler::x86::assembly::Inst::Comment($comment.into()));
        $crate::assembly!(($buf) {$($tail)*})
    };

    /********************/
    /*     LABELS       */
    /********************/
    (($buf:expr) {@$label:tt: $($tail:tt)*}) => {
        $buf.push($crate::compiler::x86::assembly::Inst::Label(stringify!($label).into()));
        $crate::assembly!(($buf) {$($tail)*})
    };

    /********************/
    /* UNIT OPERATORS */
    /********************/
    (($buf:expr) {$inst:tt; $($tail:tt)*}) => {
        $buf.push($crate::unit_op!($inst));
        $crate::assembly!(($buf) {$($tail)*})
    };

    /********************/
    /* Special Ops      */
    /********************/
    (($buf:expr) {intel_syntax noprefix; $($tail:tt)*}) => {
        $buf.push($crate::compiler::x86::assembly::Inst::IntelSyntax);
        $crate::assembly!(($buf) {$($tail)*})
    };
    (($buf:expr) {global $glbl:tt; $($tail:tt)*}) => {
        $buf.push($crate::compiler::x86::assembly::Inst::Global(stringify!($glbl).into()));
        $crate::assembly!(($buf) {$($tail)*})
    };

    (($buf:expr) {idiv % $a:tt; $($tail:tt)*}) => {
        $buf.push($crate::compiler::x86::assembly::Inst::IDiv($crate::reg64!($a)));
        $crate::assembly!(($buf) {$($tail)*})
    };

    (($buf:expr) {sete % $a:tt; $($tail:tt)*}) => {
        $buf.push($crate::compiler::x86::assembly::Inst::Sete($crate::reg8!($a)));
        $crate::assembly!(($buf) {$($tail)*})
    };
    (($buf:expr) {setne % $a:tt; $($tail:tt)*}) => {
        $buf.push($crate::compiler::x86::assembly::Inst::Setne($crate::reg8!($a)));
        $crate::assembly!(($buf) {$($tail)*})
    };
    (($buf:expr) {setl % $a:tt; $($tail:tt)*}) => {
        $buf.push($crate::compiler::x86::assembly::Inst::Setl($crate::reg8!($a)));
        $crate::assembly!(($buf) {$($tail)*})
    };
    (($buf:expr) {setle % $a:tt; $($tail:tt)*}) => {
        $buf.push($crate::compiler::x86::assembly::Inst::Setle($crate::reg8!($a)));
        $crate::assembly!(($buf) {$($tail)*})
    };

    /********************/
    /* UNARY OPERATORS */
    /********************/
    (($buf:expr) {$inst:tt $a:tt; $($tail:tt)*}) => {
        $buf.push($crate::unary_op!($inst)($crate::operand!($a)));
        $crate::assembly!(($buf) {$($tail)*})
    };
    (($buf:expr) {$inst:tt % $a:tt; $($tail:tt)*}) => {
        $buf.push($crate::unary_op!($inst)($crate::operand!(%$a)));
        $crate::assembly!(($buf) {$($tail)*})
    };

    /********************/
    /* BINARY OPERATORS */
    /********************/
    // reg, reg
    (($buf:expr) {$inst:tt % $a:tt, % $b:tt; $($tail:tt)*}) => {
        $buf.push($crate::binary_op!($inst)($crate::operand!(% $a), $crate::operand!(% $b)));
        $crate::assembly!(($buf) {$($tail)*})
    };
    // reg, literal or mem
    (($buf:expr) {$inst:tt % $a:tt, $b:tt; $($tail:tt)*}) => {
        $buf.push($crate::binary_op!($inst)($crate::operand!(% $a), $crate::operand!($b)));
        $crate::assembly!(($buf) {$($tail)*})
    };
    // mem, reg
    (($buf:expr) {$inst:tt [$($a:tt)+], % $b:tt; $($tail:tt)*}) => {
        $buf.push($crate::binary_op!($inst)($crate::operand!([$($a)+]), $crate::operand!(% $b)));
        $crate::assembly!(($buf) {$($tail)*})
    };
}
