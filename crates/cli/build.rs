use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("glimpse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("View the text of a web page in the terminal")
        .arg(clap::arg!([INPUT] "URL to open; with --dump also a local HTML file or '-' for stdin"))
        .arg(clap::arg!(--dump "Print the extracted page to stdout instead of starting the viewer"))
        .arg(clap::arg!(--plain "Leave out ANSI styling (with --dump)"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds (default: none)"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests"))
        .arg(
            clap::arg!(--"log-dir" <DIR> "Directory for the log file")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "glimpse", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "glimpse", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "glimpse", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "glimpse", &completions_dir).unwrap();
}
