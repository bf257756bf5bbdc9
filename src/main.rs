use std::env;
use std::io::{self, BufRead};
use std::process;
use std::thread;
use std::time::Instant;

use clap::{App, Arg, ArgMatches};
use log::{debug, warn};

use sokoban_engine::catalog::LevelCatalog;
use sokoban_engine::config::Config;
use sokoban_engine::data::Dir;
use sokoban_engine::formatter::SessionFormatter;
use sokoban_engine::moves::Moves;
use sokoban_engine::session::{Event, Phase, Response, Session};
use sokoban_engine::LoadCatalog;

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-engine")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("list")
                .short("l")
                .long("list")
                .help("print all levels and exit"),
        ).arg(
            Arg::with_name("moves")
                .short("m")
                .long("moves")
                .takes_value(true)
                .value_name("LURD")
                .help("replay moves in LURD notation instead of reading input"),
        ).arg(
            Arg::with_name("pause")
                .short("p")
                .long("pause")
                .takes_value(true)
                .value_name("MS")
                .help("pause after a solved level in milliseconds (default 100)"),
        ).arg(
            Arg::with_name("file")
                .help("level collection in XSB format, the stock levels are used if missing"),
        ).get_matches();

    let catalog = load_catalog(&matches);
    let config = match matches.value_of("pause") {
        None => Config::default(),
        Some(ms) => match ms.parse() {
            Ok(ms) => Config::with_pause_ms(ms),
            Err(err) => {
                println!("Invalid pause {}: {}", ms, err);
                process::exit(1);
            }
        },
    };

    if matches.is_present("list") {
        list(&catalog);
        return;
    }

    let mut session = Session::new(catalog, config);
    match matches.value_of("moves") {
        Some(lurd) => replay(&mut session, lurd),
        None => play(&mut session),
    }
}

fn load_catalog(matches: &ArgMatches<'_>) -> LevelCatalog {
    match matches.value_of("file") {
        None => LevelCatalog::builtin(),
        Some(path) => path.load_catalog().unwrap_or_else(|err| {
            let current_dir = env::current_dir().unwrap_or_default();
            println!("Can't load levels from {} in {}: {}", path, current_dir.display(), err);
            process::exit(1);
        }),
    }
}

fn list(catalog: &LevelCatalog) {
    for (i, level) in catalog.iter().enumerate() {
        println!("Level {}:", i + 1);
        println!("{}", level);
    }
}

fn replay(session: &mut Session, lurd: &str) {
    let dirs = Moves::parse_lurd(lurd).unwrap_or_else(|err| {
        println!("Invalid moves: {}", err);
        process::exit(1);
    });

    for dir in dirs {
        step(session, dir);
    }
    print!("{}", SessionFormatter::new(session));
}

/// Line based so it works without a raw terminal, input is applied after enter.
fn play(session: &mut Session) {
    println!("w/a/s/d to move, r to restart, q to quit");
    print!("{}", SessionFormatter::new(session));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("Can't read input: {}", err);
                break;
            }
        };
        for key in line.chars() {
            let dir = match key {
                'w' | 'W' => Dir::Up,
                'a' | 'A' => Dir::Left,
                's' | 'S' => Dir::Down,
                'd' | 'D' => Dir::Right,
                'r' | 'R' => {
                    session.restart();
                    continue;
                }
                'q' | 'Q' => return,
                _ => {
                    debug!("Unknown key {:?}", key);
                    continue;
                }
            };
            step(session, dir);
        }
        print!("{}", SessionFormatter::new(session));
    }
}

fn step(session: &mut Session, dir: Dir) {
    if let Response::Completed(event) = session.move_player(dir, Instant::now()) {
        let grid = session.current_grid();
        println!(
            "Level {} complete in {} moves: {}",
            session.current_level_number(),
            grid.move_cnt(),
            session.history()
        );
        print!("{}", grid);
        if event == Event::AllLevelsComplete {
            println!("All levels complete! Starting over from level 1.");
        }
        wait_for_transition(session);
    }
}

fn wait_for_transition(session: &mut Session) {
    while let Phase::Transitioning { deadline } = session.phase() {
        let now = Instant::now();
        if session.tick(now).is_none() {
            thread::sleep(deadline - now);
        }
    }
}
