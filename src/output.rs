use serde::Serialize;

pub fn output_data<T: Serialize>(data: &T, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render(data, format)?);
    Ok(())
}

fn render<T: Serialize>(data: &T, format: &str) -> Result<String, Box<dyn std::error::Error>> {
    let rendered = match format {
        "yaml" => serde_yaml::to_string(data)?,
        "json" => serde_json::to_string(data)?,
        _ => serde_json::to_string_pretty(data)?,
    };
    Ok(rendered)
}

pub fn print_success(message: &str) {
    println!("✅ {}", message);
}

pub fn print_error(message: &str) {
    eprintln!("\x1b[31m❌ Error: {}\x1b[0m", message);
}

pub fn print_info(message: &str) {
    println!("ℹ️  {}", message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::types::Status;

    #[test]
    fn renders_json_and_yaml() {
        let status = Status::default();

        let json = render(&status, "json").unwrap();
        assert!(json.starts_with("{\"health\":\"OK\""));

        let yaml = render(&status, "yaml").unwrap();
        assert!(yaml.contains("health: OK"));
    }
}
