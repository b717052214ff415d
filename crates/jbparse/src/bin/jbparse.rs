//! jbparse - Dump account statements from saved netbank pages.

fn main() -> std::process::ExitCode {
    jbparse::cmd::root::main()
}
