//! Fixed settings for the `cat` utility.
//!
//! There is no configuration file; behaviour is controlled entirely by the
//! command line, plus `RUST_LOG` for diagnostic logging.

/// Label given to the first numbered line of every file.
pub const FIRST_LINE_NUMBER: usize = 0;

/// Help text printed for `-h` / `--help`.
pub const HELP_TEXT: &str = "Prints files to stdout.
Usage: cat [OPTION].. [FILE].. 

Options:
-n, --number                Prefix each line in the output with its line number.
-b, --number-nonblank       Prefix each nonempty line in the output with its line number. Overrides -n
";
