pub const BANNER: &str = r#"
                                                   
 _ __ ___   __ _ ___ ___ _ __ ___  ___ 
| '_ ` _ \ / _` / __/ __| '__/ _ \/ __|
| | | | | | (_| \__ \__ \ | |  __/\__ \
|_| |_| |_|\__,_|___/___/_|  \___||___/
"#;

pub const EXAMPLES: &str = "\
Malformed hostnames are detected and skipped automatically.

Examples:
  Reading directly from sublist3r output:
    sublist3r -d domain.com | massres -i

  Redirecting output from the terminal:
    cat host_file | massres -i

  Resolving a file and saving a Markdown report:
    massres -f host_file -s report.md";
