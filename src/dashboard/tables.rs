//! Table view for the expenses of a month.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    expense::Expense,
    html::{BUTTON_DELETE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
};

/// Renders the expenses of a month in the order they were added.
///
/// When `deletable` is set, each row gets a delete button that the delete
/// script picks up through its `data-delete-url` attribute.
pub(crate) fn expense_table_view(expenses: &[Expense], deletable: bool) -> Markup {
    html! {
        div class="w-full max-w-screen-lg mx-auto overflow-x-auto rounded-lg shadow"
        {
            table id="expense-table" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Memo" }
                        th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Amount" }
                        @if deletable {
                            th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Delete" } }
                        }
                    }
                }

                tbody
                {
                    @for expense in expenses {
                        tr id=(format!("expense-{}", expense.id)) class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (expense.date) }
                            td class=(TABLE_CELL_STYLE) { (expense.memo) }
                            td class={(TABLE_CELL_STYLE) " text-right"} { (format_currency(expense.amount)) }
                            @if deletable {
                                td class=(TABLE_CELL_STYLE)
                                {
                                    button
                                        type="button"
                                        class=(BUTTON_DELETE_STYLE)
                                        data-delete-url=(format_endpoint(endpoints::DELETE_EXPENSE, expense.id))
                                    {
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }

                    @if expenses.is_empty() {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td
                                colspan=(if deletable { 4 } else { 3 })
                                class={(TABLE_CELL_STYLE) " text-center"}
                            {
                                "No expenses recorded yet."
                            }
                        }
                    }
                }
            }
        }
    }
}
