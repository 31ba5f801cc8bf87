/*!
 # x86
 ## About
 This module provides a DSL that models the x86-64 assembly language, as
 accepted by the GNU assembler in Intel syntax, and the subset of it that
 the stack machine code generator emits.

 The core macro is `assembly!`, which pushes [`assembly::Inst`] values onto
 any buffer with a `push` method.

 ## Example
 ```ignore
 assembly!{(code){
     mov %rax, %rbp;
     sub %rax, {offset};
     push %rax;
 }}
 ```

## Syntax
1. `%<register>` - The `%` prefix indicates that the next token will be a register.
2. `{expression}` - This is an expression which will be evaluated and whose result
    will be used as an integer operand in the generated x86 assembly.
3. `[%reg]`, `[%reg-8]`, `[%reg-{expression}]` - memory operands.
4. `@label:` - defines a global label named `label`.
5. `;"comment"` or `;{expression}` - emits a comment line.
6. `{{iterable of instructions}}` - injects any iterable which contains `Inst`. This
    allows x86 code generated in helper functions to be easily injected into an
    assembly macro.
 */

pub mod assembly;

#[cfg(test)]
pub mod machine;
