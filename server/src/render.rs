//! HTML rendering for the page surface.
//!
//! Pages are small enough that templates would be overhead; they are
//! built as strings here, with all user-supplied text passed through
//! [`escape`].

use axum::http::StatusCode;

use todo_core::Todo;

/// Render the todo list page.
pub fn todo_page(todos: &[Todo]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Todos</title>\n\
         <style>\n\
         body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }\n\
         ul { list-style: none; padding: 0; }\n\
         li { padding: 0.25rem 0; }\n\
         li.done a { text-decoration: line-through; color: #888; }\n\
         a { color: inherit; text-decoration: none; }\n\
         a.delete { color: #c00; margin-left: 0.5rem; }\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>Todos</h1>\n\
         <form action=\"/add\" method=\"post\">\n\
         <input name=\"title\" placeholder=\"What needs doing?\" autofocus>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n",
    );

    if todos.is_empty() {
        page.push_str("<p>Nothing to do yet.</p>\n");
    } else {
        page.push_str("<ul>\n");
        for todo in todos {
            let class = if todo.complete { " class=\"done\"" } else { "" };
            page.push_str(&format!(
                "<li{class}><a href=\"/update/{id}\">{title}</a>\
                 <a class=\"delete\" href=\"/delete/{id}\">&times;</a></li>\n",
                id = todo.id,
                title = escape(&todo.title),
            ));
        }
        page.push_str("</ul>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

/// Render a minimal error page for the given status.
pub fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>{status}</title></head>\n\
         <body>\n\
         <h1>{status}</h1>\n\
         <p>{message}</p>\n\
         <p><a href=\"/\">Back to the list</a></p>\n\
         </body>\n\
         </html>\n",
        status = status,
        message = escape(message),
    )
}

/// Escape text for interpolation into HTML content or attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
