fn main() {
    println!("cargo:rerun-if-changed=./ui/editor.slint");

    slint_build::compile("ui/editor.slint").expect("slint compilation should succeed");
}
