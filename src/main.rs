use std::{env, process::ExitCode, time::Instant};

use log::{error, info};
use serde::Serialize;

use movie_similarity::{
    config::{self, Config},
    load_movies, pick_reference, Hits, Result, TFIDFVectorizer,
};

#[derive(Serialize)]
struct Report<'a> {
    movie: &'a str,
    genre: &'a Hits<String>,
    tfidf: &'a Hits<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env().with_args(env::args().skip(1)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{}", config::usage());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{}", config::usage());
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let start = Instant::now();
    let movies = load_movies(&config.data_path, &config.validation)?;
    let reference = pick_reference(&movies, config.movie.as_deref())?;

    let genre_hits = reference.genre_similarities(&movies).above(config.genre_threshold);

    let vectorizer: TFIDFVectorizer = TFIDFVectorizer::from_movies(&movies)?;
    let tfidf_hits = vectorizer
        .similarities_to(&reference.title)?
        .above(config.tfidf_threshold);
    info!(
        "scored {} movies against {:?} in {:.2}ms",
        movies.len(),
        reference.title,
        start.elapsed().as_secs_f64() * 1000.0
    );

    if config.json {
        let report = Report {
            movie: &reference.title,
            genre: &genre_hits,
            tfidf: &tfidf_hits,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Cosine similarities with {}:", reference.title);
        print!("{genre_hits}");
        println!();
        println!("TF-IDF similarities with {}:", reference.title);
        print!("{tfidf_hits}");
    }
    Ok(())
}
