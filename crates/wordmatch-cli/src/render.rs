use wordmatch_catalog::TokenCatalog;
use wordmatch_core::Category;
use wordmatch_game::{BoardSnapshot, Game};

/// Renders the board with row and column indices and the score below it.
pub(crate) fn board(snapshot: &BoardSnapshot) -> String {
    let width = snapshot
        .cells()
        .iter()
        .map(|token| token.text().chars().count())
        .max()
        .unwrap_or(1);
    let label = snapshot.dims().rows().saturating_sub(1).to_string().len();

    let header: String = (0..snapshot.dims().cols())
        .map(|col| format!(" {col:<width$}"))
        .collect();
    let mut lines = vec![format!("{:label$} {header}", "")];
    for (row, tokens) in snapshot.rows().enumerate() {
        let cells: String = tokens
            .iter()
            .map(|token| format!(" {token:<width$}"))
            .collect();
        lines.push(format!("{row:>label$} {cells}").trim_end().to_owned());
    }
    lines.push(format!("Score: {}", snapshot.score()));
    lines.join("\n")
}

pub(crate) fn categories(game: &Game) -> String {
    let names: Vec<&str> = game.categories().map(Category::as_str).collect();
    format!("Categories: {}", names.join(", "))
}

pub(crate) fn catalog(catalog: &TokenCatalog) -> String {
    catalog
        .categories()
        .map(|category| {
            let words = catalog
                .tokens_for(category.as_str())
                .map(|words| words.iter().map(|w| &**w).collect::<Vec<_>>().join(", "))
                .unwrap_or_default();
            format!("{category}: {words}\n")
        })
        .collect()
}
