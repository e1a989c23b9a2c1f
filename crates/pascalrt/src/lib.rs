//! # pascalrt
//!
//! Static runtime library for programs produced by the Pascal compiler.
//! Link `libpascalrt.a` with the assembled program object; the program must
//! define `asm_main`.
//!
//! ```text
//! cargo build --release -p pascalrt --target i686-unknown-linux-gnu
//! nasm -f elf32 prog.asm -o prog.o
//! cc -m32 prog.o target/i686-unknown-linux-gnu/release/libpascalrt.a -lpthread -ldl -lm -o prog
//! ```

// Pull every export into the archive.
pub use pascalrt_abi::{malloc_abi, math_abi, startup_abi, stdio_abi};

#[cfg(not(test))]
pub mod entry {
    use std::ffi::c_int;

    use pascalrt_abi::startup_abi::run_program;

    #[cfg(target_arch = "x86")]
    unsafe extern "cdecl" {
        fn asm_main() -> c_int;
    }

    #[cfg(not(target_arch = "x86"))]
    unsafe extern "C" {
        fn asm_main() -> c_int;
    }

    /// Process entry: run the compiled program and exit with its status.
    #[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
    pub extern "C" fn main() -> c_int {
        // SAFETY: `asm_main` is the compiler's entry routine, defined by the
        // program object this library is linked with.
        unsafe { run_program(asm_main) }
    }
}
