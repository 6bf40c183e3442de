//! The `timequiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("timequiz.toml").exists() {
        println!("timequiz.toml already exists, skipping.");
    } else {
        std::fs::write("timequiz.toml", SAMPLE_CONFIG)?;
        println!("Created timequiz.toml");
    }

    let quiz_path = std::path::Path::new("defaultQuiz.csv");
    if quiz_path.exists() {
        println!("defaultQuiz.csv already exists, skipping.");
    } else {
        std::fs::write(quiz_path, EXAMPLE_QUIZ)?;
        println!("Created defaultQuiz.csv");
    }

    println!("\nNext steps:");
    println!("  1. Add your own question,answer rows to defaultQuiz.csv");
    println!("  2. Run: timequiz validate --file defaultQuiz.csv");
    println!("  3. Run: timequiz run --shuffle");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# timequiz configuration

quiz_file = "defaultQuiz.csv"
time_limit = "30s"
shuffle = false
# seed = 42
pass_threshold = 6
"#;

const EXAMPLE_QUIZ: &str = "5+5,10
7+3,10
1+1,2
8+3,11
1+2,3
8+6,14
3+1,4
1+4,5
5+1,6
2+3,5
3+3,6
2+4,6
";
