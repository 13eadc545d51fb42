use reldate::parse_date;

fn main() {
    let input: String = std::env::args().nth(1).unwrap_or_default();
    match parse_date(&input) {
        Ok(dt) => println!("{}", dt.format("%+")),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
