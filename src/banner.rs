// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
              _     _                 _    
   __ _ _   _(_)___| |__   ___   ___ | | __
  / _` | | | | |_  / '_ \ / _ \ / _ \| |/ /
 | (_| | |_| | |/ /| |_) | (_) | (_) |   < 
  \__, |\__,_|_/___|_.__/ \___/ \___/|_|\_\
     |_|                                   

    Quiz Authoring & Grading Service
"#;
    println!("{}", banner);
}
