use std::error::Error;

fn main() {
    if let Err(e) = run() {
        fail(&e.to_string());
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("cargo::rerun-if-changed=build.rs");

    #[cfg(feature = "embedded-chuffed")]
    compile_chuffed_shim()?;

    Ok(())
}

/// Compiles the C shim over Chuffed and links it against the Chuffed installation in
/// `CHUFFED_DIR`.
#[cfg(feature = "embedded-chuffed")]
fn compile_chuffed_shim() -> Result<(), Box<dyn Error>> {
    use std::path::PathBuf;

    println!("cargo::rerun-if-changed=cpp/chuffed_shim.cpp");
    println!("cargo::rerun-if-env-changed=CHUFFED_DIR");

    let chuffed_dir = std::env::var_os("CHUFFED_DIR")
        .map(PathBuf::from)
        .ok_or("the embedded-chuffed feature requires CHUFFED_DIR to point at a Chuffed installation")?;

    cc::Build::new()
        .cpp(true)
        .flag_if_supported("-std=c++17")
        .file("cpp/chuffed_shim.cpp")
        .include(chuffed_dir.join("include"))
        .try_compile("chuffed_shim")?;

    println!(
        "cargo::rustc-link-search=native={}",
        chuffed_dir.join("lib").display()
    );
    println!("cargo::rustc-link-lib=static=chuffed_fzn");
    println!("cargo::rustc-link-lib=static=chuffed");

    Ok(())
}

fn fail(s: &str) -> ! {
    eprintln!("\n\nerror occurred: {s}\n\n");
    std::process::exit(1);
}
