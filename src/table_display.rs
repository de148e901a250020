use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;

use tmdb_cli::api::models::{PopularMovie, RatedMovie};

pub fn display_popular(movies: &[PopularMovie]) {
    if movies.is_empty() {
        println!("{}", "No results found.".yellow());
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Movie Title").add_attribute(Attribute::Bold),
        Cell::new("Average rating").add_attribute(Attribute::Bold),
        Cell::new("Total votes").add_attribute(Attribute::Bold),
    ]);

    for movie in movies {
        table.add_row(vec![
            movie.title.clone(),
            format!("{:.1}", movie.average_rating),
            movie.vote_count.to_string(),
        ]);
    }

    println!("{table}");
    println!("\n{}", format!("{} popular movies", movies.len()).green());
}

pub fn display_rated(movies: &[RatedMovie], average: Option<f64>) {
    if movies.is_empty() {
        println!("{}", "No results found.".yellow());
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Movie Title").add_attribute(Attribute::Bold),
        Cell::new("Average rating").add_attribute(Attribute::Bold),
        Cell::new("User rating").add_attribute(Attribute::Bold),
    ]);

    for movie in movies {
        table.add_row(vec![
            movie.title.clone(),
            format!("{:.1}", movie.average_rating),
            format!("{:.1}", movie.user_rating),
        ]);
    }

    println!("{table}");
    match average {
        Some(value) => println!(
            "\n{}",
            format!(
                "{} rated movies, average user rating {:.2}",
                movies.len(),
                value
            )
            .green()
        ),
        None => println!("\n{}", format!("{} rated movies", movies.len()).green()),
    }
}
