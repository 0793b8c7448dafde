use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    let convert = table
        .get("convert")
        .and_then(|v| v.as_table())
        .expect("default_config.toml is missing the [convert] table");

    for key in ["indent_width", "max_level"] {
        if convert.get(key).and_then(|v| v.as_integer()).is_none() {
            panic!("default_config.toml: convert.{} must be an integer", key);
        }
    }
}
