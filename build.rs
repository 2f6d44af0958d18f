use std::{env, fs::File, io::Write, path::Path};

fn parse_env(name: &str, default: usize) -> usize {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .unwrap_or_else(|_| panic!("Could not parse {}", name)),
        Err(_) => default,
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").expect("No out dir");
    let dest_path = Path::new(&out_dir).join("constants.rs");
    let mut f = File::create(&dest_path).expect("Could not create file");

    let max_hss_levels = parse_env("LMS_HSS_MAX_LEVELS", 8);
    let max_tree_height = parse_env("LMS_HSS_MAX_TREE_HEIGHT", 25);
    let min_winternitz = parse_env("LMS_HSS_MIN_WINTERNITZ", 1);

    assert!(
        (1..=8).contains(&max_hss_levels),
        "LMS_HSS_MAX_LEVELS must be within 1..=8"
    );
    assert!(
        [5, 10, 15, 20, 25].contains(&max_tree_height),
        "LMS_HSS_MAX_TREE_HEIGHT must be one of 5, 10, 15, 20, 25"
    );
    assert!(
        [1, 2, 4, 8].contains(&min_winternitz),
        "LMS_HSS_MIN_WINTERNITZ must be one of 1, 2, 4, 8"
    );

    write!(
        &mut f,
        "pub const MAX_HSS_LEVELS: usize = {};\n\
         pub const MAX_TREE_HEIGHT: usize = {};\n\
         pub const MIN_WINTERNITZ: usize = {};\n",
        max_hss_levels, max_tree_height, min_winternitz
    )
    .expect("Could not write file");

    println!("cargo:rerun-if-env-changed=LMS_HSS_MAX_LEVELS");
    println!("cargo:rerun-if-env-changed=LMS_HSS_MAX_TREE_HEIGHT");
    println!("cargo:rerun-if-env-changed=LMS_HSS_MIN_WINTERNITZ");
}
