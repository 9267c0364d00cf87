//! Command handlers. Each returns the process exit code.

use crate::cli::{Commands, OutputFormat};
use anyhow::{Context, Result};
use laneboard_config::BoardConfig;
use laneboard_kanban::{
    BoardLayout, BoardState, Card, CardId, CardStorage, ColumnId, DragController, DragOutcome,
    FileBlobStore, Point, PointerEvent, StackedLayout,
};
use serde::Serialize;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
/// The command ran but changed nothing (blank add, failed move, drop outside the board)
pub const EXIT_UNCHANGED: i32 = 2;

type Board = BoardState<FileBlobStore>;

/// Open the file-backed board described by the configuration
pub fn open_board(config: &BoardConfig) -> Board {
    let store = FileBlobStore::new(&config.storage_dir);
    let mut board = BoardState::load(CardStorage::with_key(store, config.storage_key.clone()));
    board.on_change(|event| tracing::info!(?event, "cards changed"));
    board
}

pub fn run(command: &Commands, config: &BoardConfig, format: OutputFormat) -> Result<i32> {
    let mut board = open_board(config);
    match command {
        Commands::Add { column, text } => add(&mut board, config, column, &text.join(" "), format),
        Commands::Delete { id } => delete(&mut board, id),
        Commands::Move { id, column, index } => {
            move_card(&mut board, config, id, column, *index, format)
        }
        Commands::List { column } => list(&board, config, column.as_deref(), format),
        Commands::Columns => columns(&board, config, format),
        Commands::Drag { id, x, y, via } => {
            let via: Vec<Point> = via.iter().map(|&(x, y)| Point::new(x, y)).collect();
            drag(&mut board, config, id, &via, Point::new(*x, *y), format)
        }
    }
}

fn warn_unrendered(config: &BoardConfig, column: &str) {
    if !config.columns.iter().any(|c| c == column) {
        tracing::warn!(column, "column is not configured and will not be rendered");
    }
}

fn add(
    board: &mut Board,
    config: &BoardConfig,
    column: &str,
    text: &str,
    format: OutputFormat,
) -> Result<i32> {
    warn_unrendered(config, column);
    let Some(card) = board
        .submit_card(text, column)
        .context("Failed to save the new card")?
    else {
        eprintln!("Nothing to add: card text is blank");
        return Ok(EXIT_UNCHANGED);
    };

    match format {
        OutputFormat::Json => print_json(&card)?,
        OutputFormat::Table => println!("Added {} to {}", card.id, card.column),
    }
    Ok(EXIT_SUCCESS)
}

fn delete(board: &mut Board, id: &str) -> Result<i32> {
    let id = CardId::from(id);
    if board.card(&id).is_none() {
        tracing::info!(%id, "no such card, nothing deleted");
    }
    board
        .delete_card(&id)
        .context("Failed to save after delete")?;
    Ok(EXIT_SUCCESS)
}

fn move_card(
    board: &mut Board,
    config: &BoardConfig,
    id: &str,
    column: &str,
    index: i64,
    format: OutputFormat,
) -> Result<i32> {
    warn_unrendered(config, column);
    let id = CardId::from(id);
    if !board
        .move_card(&id, column, index)
        .context("Failed to save after move")?
    {
        eprintln!("No card with id {}", id);
        return Ok(EXIT_UNCHANGED);
    }

    report_position(board, &id, format)?;
    Ok(EXIT_SUCCESS)
}

fn drag(
    board: &mut Board,
    config: &BoardConfig,
    id: &str,
    via: &[Point],
    release: Point,
    format: OutputFormat,
) -> Result<i32> {
    let id = CardId::from(id);
    let layout = StackedLayout::for_board(board, &config.column_ids(), &config.layout);
    let Some(location) = layout.locate(&id) else {
        eprintln!("Card {} is not on the rendered board", id);
        return Ok(EXIT_UNCHANGED);
    };

    let mut controller = DragController::new();
    let mut events = vec![PointerEvent::press_card(id.clone(), location.bounds.center())];
    events.extend(via.iter().copied().map(PointerEvent::move_to));
    events.push(PointerEvent::release_at(release));

    let mut outcome = DragOutcome::Ignored;
    for event in events {
        outcome = controller
            .handle(event, board, &layout)
            .context("Failed to save the dropped card")?;
        if let Some(indicator) = controller.indicator() {
            tracing::debug!(
                column = %indicator.column,
                index = indicator.index,
                height = indicator.height,
                "drop indicator"
            );
        }
    }

    report_drop(board, &id, outcome, release, format)
}

fn report_drop(
    board: &Board,
    id: &CardId,
    outcome: DragOutcome,
    release: Point,
    format: OutputFormat,
) -> Result<i32> {
    match outcome {
        DragOutcome::Moved { .. } => {
            report_position(board, id, format)?;
            Ok(EXIT_SUCCESS)
        }
        DragOutcome::Dropped {
            target: Some(target),
            ..
        } => {
            eprintln!(
                "Card {} could not be moved to {}[{}]",
                id, target.column, target.index
            );
            Ok(EXIT_UNCHANGED)
        }
        _ => {
            eprintln!(
                "Released at ({}, {}) outside every column; card not moved",
                release.x, release.y
            );
            Ok(EXIT_UNCHANGED)
        }
    }
}

#[derive(Serialize)]
struct CardPosition<'a> {
    #[serde(flatten)]
    card: &'a Card,
    index: usize,
}

fn report_position(board: &Board, id: &CardId, format: OutputFormat) -> Result<()> {
    let (card, (column, index)) = board
        .card(id)
        .zip(board.position_of(id))
        .context("Moved card disappeared from the board")?;
    match format {
        OutputFormat::Json => print_json(&CardPosition { card, index })?,
        OutputFormat::Table => println!("Moved {} to {}[{}]", id, column, index),
    }
    Ok(())
}

#[derive(Serialize)]
struct ColumnListing<'a> {
    column: ColumnId,
    cards: Vec<&'a Card>,
}

fn listings<'a>(board: &'a Board, columns: &[ColumnId]) -> Vec<ColumnListing<'a>> {
    columns
        .iter()
        .map(|column| ColumnListing {
            column: column.clone(),
            cards: board.column_cards(column),
        })
        .collect()
}

fn list(
    board: &Board,
    config: &BoardConfig,
    column: Option<&str>,
    format: OutputFormat,
) -> Result<i32> {
    let mut columns = match column {
        Some(column) => vec![ColumnId::from(column)],
        None => config.column_ids(),
    };
    if column.is_none() {
        // Cards in columns that are not configured are still shown
        for card in board.cards() {
            if !columns.contains(&card.column) {
                columns.push(card.column.clone());
            }
        }
    }

    let listings = listings(board, &columns);
    match format {
        OutputFormat::Json => print_json(&listings)?,
        OutputFormat::Table => {
            for listing in &listings {
                println!("{} ({})", listing.column, listing.cards.len());
                for card in &listing.cards {
                    println!("  {}  {}", card.id, card.text);
                }
            }
        }
    }
    Ok(EXIT_SUCCESS)
}

#[derive(Serialize)]
struct ColumnSummary {
    column: ColumnId,
    cards: usize,
    left: f64,
    right: f64,
}

fn columns(board: &Board, config: &BoardConfig, format: OutputFormat) -> Result<i32> {
    let layout = StackedLayout::for_board(board, &config.column_ids(), &config.layout);
    let summaries: Vec<ColumnSummary> = layout
        .columns()
        .into_iter()
        .map(|geometry| ColumnSummary {
            cards: board.column_cards(&geometry.id).len(),
            left: geometry.bounds.left,
            right: geometry.bounds.right(),
            column: geometry.id,
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&summaries)?,
        OutputFormat::Table => {
            for summary in &summaries {
                println!(
                    "{:<16} {:>4} cards   x {}..{}",
                    summary.column.as_str(),
                    summary.cards,
                    summary.left,
                    summary.right
                );
            }
        }
    }
    Ok(EXIT_SUCCESS)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
