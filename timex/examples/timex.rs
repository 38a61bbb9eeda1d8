use timex::Timex;

fn main() {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    if args.is_empty() {
        println!("usage: timex <time-token> ...");
        return;
    }

    for token in args {
        match Timex::parse(&token) {
            Some(t) => {
                println!("{} => {} [{}s]", token, t, t.duration().num_seconds());
                println!("{}", serde_json::to_string_pretty(&t.to_records()).unwrap());
            }
            None => println!("{} => no timex pattern matched", token),
        }
    }
}
