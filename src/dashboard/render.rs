use comfy_table::{
    presets::ASCII_MARKDOWN, Cell, CellAlignment, ContentArrangement, Row as CRow, Table,
};

use crate::dashboard::chart::bar_chart;
use crate::stats::{
    BasicStats, CrossTableStats, DashboardStats, MoviesTableStats, RatingsTableStats,
    TagsTableStats,
};

/// Print the full dashboard to stdout. Sections mirror the five stat
/// groups; this layer only formats, it computes nothing.
pub fn render(stats: &DashboardStats) {
    println!("MovieLens Data Dashboard");
    println!("Quick facts and summaries from the dataset");
    show_basic(&stats.basic);
    show_movies(&stats.movies);
    show_ratings(&stats.ratings);
    show_tags(&stats.tags);
    show_cross(&stats.cross);
}

fn section(title: &str) {
    println!();
    println!("{}", "=".repeat(72));
    println!("{title}");
    println!("{}", "=".repeat(72));
}

/// One-row table of labeled metrics, labels as the header.
fn metric_row(metrics: &[(&str, String)]) {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t.set_header(metrics.iter().map(|&(label, _)| label).collect::<Vec<_>>());

    let mut row = CRow::new();
    for (_, value) in metrics {
        row.add_cell(Cell::new(value).set_alignment(CellAlignment::Right));
    }
    t.add_row(row);
    println!("{t}");
}

fn show_basic(stats: &BasicStats) {
    println!();
    metric_row(&[
        ("Total Movies", stats.total_movies.to_string()),
        ("Total Ratings", stats.total_ratings.to_string()),
        ("Unique Users", stats.total_unique_users.to_string()),
        ("Total Tags", stats.total_tags.to_string()),
    ]);
}

fn show_movies(stats: &MoviesTableStats) {
    section("Movies Table Insights");

    println!("\nTop 10 Most Common Genres");
    print!("{}", bar_chart(&count_rows(&stats.top_genres)));

    println!("\nGenres per Movie Summary");
    metric_row(&[
        ("Min Genres per Movie", stats.genres_per_movie.min.to_string()),
        ("Max Genres per Movie", stats.genres_per_movie.max.to_string()),
        (
            "Avg Genres per Movie",
            format!("{:.2}", stats.genres_per_movie.avg),
        ),
    ]);

    println!(
        "\nMost Genre-Diverse Movies: {} genres",
        stats.genres_per_movie.max
    );
    for m in &stats.most_genre_diverse_movies {
        println!("  {} ({})", m.title, m.genres);
    }
}

fn show_ratings(stats: &RatingsTableStats) {
    section("Ratings Table Insights");

    metric_row(&[(
        "Average Rating",
        format!("{:.2}", stats.avg_rating_overall),
    )]);

    println!("\nRating Distribution");
    let distribution: Vec<(String, f64)> = stats
        .rating_distribution
        .iter()
        .map(|&(value, count)| (format!("{value:.1}"), count as f64))
        .collect();
    print!("{}", bar_chart(&distribution));

    println!("\nMost Active Users");
    let users: Vec<(String, f64)> = stats
        .most_active_users
        .iter()
        .map(|&(user_id, count)| (user_id.to_string(), count as f64))
        .collect();
    print!("{}", bar_chart(&users));

    println!("\nMost Rated Movies (Top 10)");
    let mut t = ranking_table(&["#", "Title", "ID", "Ratings"]);
    for (i, m) in stats.most_rated_movies.iter().enumerate() {
        t.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(&m.title),
            Cell::new(m.movie_id).set_alignment(CellAlignment::Right),
            Cell::new(m.rating_count).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{t}");

    println!("\nTop Rated Movies (Top 10, at least 100 ratings)");
    let mut t = ranking_table(&["#", "Title", "ID", "Avg Rating", "Ratings"]);
    for (i, m) in stats.top_rated_movies.iter().enumerate() {
        t.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(&m.title),
            Cell::new(m.movie_id).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", m.avg_rating)).set_alignment(CellAlignment::Right),
            Cell::new(m.rating_count).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{t}");
}

fn show_tags(stats: &TagsTableStats) {
    section("Tags Table Insights");

    metric_row(&[("Unique Tags", stats.unique_tags_count.to_string())]);

    println!("\nMost Common Tags");
    print!("{}", bar_chart(&count_rows(&stats.most_common_tags)));

    println!("\nTop Tagging Users (distinct movies tagged)");
    let users: Vec<(String, f64)> = stats
        .top_tagging_users
        .iter()
        .map(|&(user_id, count)| (user_id.to_string(), count as f64))
        .collect();
    print!("{}", bar_chart(&users));
}

fn show_cross(stats: &CrossTableStats) {
    section("Cross-Table Insights");

    println!("Percentage of movies with at least one rating / one tag");
    metric_row(&[
        ("Ratings Coverage (%)", format!("{:.1}", stats.ratings_coverage)),
        ("Tags Coverage (%)", format!("{:.1}", stats.tags_coverage)),
    ]);

    println!("\nAverage Rating per Genre");
    print!("{}", bar_chart(&stats.genre_rating_correlation));
}

fn ranking_table(header: &[&str]) -> Table {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t.set_header(header.to_vec());
    t
}

fn count_rows(entries: &[(String, u64)]) -> Vec<(String, f64)> {
    entries
        .iter()
        .map(|(label, count)| (label.clone(), *count as f64))
        .collect()
}
