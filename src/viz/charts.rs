use std::path::Path;

use anyhow::{bail, Context, Result};
use plotters::prelude::*;

use crate::api::models::{PopularMovie, RatedMovie};

/// Upper bound of the TMDB rating scale, shared by both chart axes.
const RATING_SCALE: f64 = 10.0;

/// Rotated x labels longer than this are elided.
const LABEL_MAX_CHARS: usize = 28;

/// Renders the popular list as a bar chart, one bar per title, sorted
/// by descending average rating.
pub fn popular_movies_chart(
    movies: &[PopularMovie],
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    if movies.is_empty() {
        bail!("no popular movies to chart");
    }

    let mut sorted: Vec<&PopularMovie> = movies.iter().collect();
    sorted.sort_by(|a, b| {
        b.average_rating
            .partial_cmp(&a.average_rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let titles: Vec<String> = sorted.iter().map(|movie| shorten(&movie.title)).collect();
    let scores: Vec<f64> = sorted.iter().map(|movie| movie.average_rating).collect();

    draw_bar_chart(path, size, "Popular movies", "Average rating", &titles, &scores, None)
        .with_context(|| format!("rendering chart to {}", path.display()))
}

/// Renders the rated list in fetch order, with a dashed reference line
/// at the average user rating when one is available.
pub fn rated_movies_chart(
    movies: &[RatedMovie],
    average: Option<f64>,
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    if movies.is_empty() {
        bail!("no rated movies to chart");
    }

    let titles: Vec<String> = movies.iter().map(|movie| shorten(&movie.title)).collect();
    let scores: Vec<f64> = movies.iter().map(|movie| movie.user_rating).collect();

    draw_bar_chart(path, size, "Rated movies", "User rating", &titles, &scores, average)
        .with_context(|| format!("rendering chart to {}", path.display()))
}

fn draw_bar_chart(
    path: &Path,
    size: (u32, u32),
    caption: &str,
    y_desc: &str,
    titles: &[String],
    scores: &[f64],
    reference: Option<f64>,
) -> Result<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 30).into_font())
        .margin(12)
        .x_label_area_size(170)
        .y_label_area_size(48)
        .build_cartesian_2d((0u32..titles.len() as u32).into_segmented(), 0f64..RATING_SCALE)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(titles.len())
        .x_label_formatter(&|segment| segment_title(segment, titles))
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.filled())
            .margin(3)
            .data(scores.iter().enumerate().map(|(i, score)| (i as u32, *score))),
    )?;

    if let Some(value) = reference {
        chart
            .draw_series(DashedLineSeries::new(
                vec![
                    (SegmentValue::Exact(0), value),
                    (SegmentValue::Exact(titles.len() as u32), value),
                ],
                8,
                5,
                RED.stroke_width(3),
            ))?
            .label(format!("Average user rating ({value:.2})"))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], RED.stroke_width(3)));

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Maps a segment back to the movie title it represents. Tick labels
/// land on segment centers; the trailing boundary has no title.
fn segment_title(segment: &SegmentValue<u32>, titles: &[String]) -> String {
    let index = match segment {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => *i as usize,
        SegmentValue::Last => return String::new(),
    };
    titles.get(index).cloned().unwrap_or_default()
}

fn shorten(title: &str) -> String {
    if title.chars().count() <= LABEL_MAX_CHARS {
        title.to_string()
    } else {
        let cut: String = title.chars().take(LABEL_MAX_CHARS - 1).collect();
        format!("{}…", cut)
    }
}
