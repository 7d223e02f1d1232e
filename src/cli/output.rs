use comfy_table::presets::NOTHING;
use comfy_table::*;
use o365endpoints::View;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

pub const INTRO: &str = "\nWelcome to O365 endpoints.\n\nEnter filter number or Ctrl+C to exit:";

pub const FAREWELL: &str = "Thank you for using O365 endpoints.";

/*--------------------------------------------------------------------------------------
  Menu Table
--------------------------------------------------------------------------------------*/

/// Numbered list of views; the number selects a view in the interactive shell and the name
/// selects it on the command line.
pub fn menu_table(with_names: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for view in View::ALL {
        let mut row = vec![Cell::new(format!("{}:", view.number())), Cell::new(view.title())];
        if with_names {
            row.push(Cell::new(view.name()).fg(Color::Green));
        }
        table.add_row(row);
    }

    // Right-align the number column
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_table_lists_every_view() {
        let menu = menu_table(false).to_string();
        for view in View::ALL {
            assert!(menu.contains(&view.title()), "{view}");
        }
        assert!(menu.contains("12:"));
    }

    #[test]
    fn test_menu_table_with_names() {
        let menu = menu_table(true);
        assert_eq!(menu.row_iter().count(), View::ALL.len());
        assert!(menu.to_string().contains("express-route-exceptions"));
    }
}
