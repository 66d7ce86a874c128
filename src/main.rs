use std::io::{self, BufRead, Write};

use html::to_html;
use html::traverse::get_element_by_id;
use sidenav::{HttpFetcher, NavConfig, Page, SideNav};

const DEFAULT_PAGE_URL: &str = "http://localhost:8080/";

fn print_nav(page: &Page, config: &NavConfig) {
    match get_element_by_id(page.document(), &config.container_id) {
        Some(nav) => println!("{}", to_html(nav)),
        None => println!("(no #{} element)", config.container_id),
    }
}

fn main() {
    let page_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PAGE_URL.to_string());
    let config = NavConfig::default();

    let mut page = match Page::shell(&page_url, &config) {
        Ok(page) => page,
        Err(err) => {
            eprintln!("invalid page url {page_url:?}: {err}");
            std::process::exit(2);
        }
    };

    let nav = SideNav::new(config.clone(), HttpFetcher::new());
    if let Err(err) = nav.init(&mut page) {
        // The page stays as it was; only report it on the status line.
        println!("status: nav unavailable ({err})");
    }
    print_nav(&page, &config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match line.trim() {
            "quit" | "exit" => break,
            "show" => print_nav(&page, &config),
            "toggle" => {
                if let Err(err) = page.click_element(&config.toggle_id) {
                    println!("{err}");
                    continue;
                }
                page.pump();
                println!("{}", to_html(page.document()));
            }
            hash if hash.starts_with('#') => {
                page.set_hash(hash);
                page.pump();
                print_nav(&page, &config);
            }
            "" => {}
            other => println!("unknown command {other:?} (try #fragment, toggle, show, quit)"),
        }
    }
}
