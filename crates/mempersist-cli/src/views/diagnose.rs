use owo_colors::OwoColorize;

pub fn print_header() {
    println!();
    println!("{}", "=== mem-persist Diagnostics ===".bold());
}

pub fn print_section(message: &str) {
    println!();
    println!("{}", message);
}

pub fn print_check(message: &str, passed: bool) {
    if passed {
        println!("{} {}", "✓".green(), message);
    } else {
        println!("{} {}", "✗".red(), message);
    }
}

pub fn print_info(message: &str) {
    println!("{} {}", "·".blue(), message);
}

pub fn print_summary(all_passed: bool) {
    println!();
    println!("{}", "=== Summary ===".bold());
    println!();
    if all_passed {
        println!("{}", "✓ All checks passed!".green());
        println!();
        println!("You can now run: mem-persist save");
    } else {
        println!("{}", "✗ Some checks failed".red());
        println!();
        println!("Please fix the issues above before proceeding.");
    }
}
