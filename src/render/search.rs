use super::layout::{escape, page, FORM_STYLE};
use crate::constants::{IS_EXPRESS_KEY, ROUTE_NAME_KEY, TRANSPORT_TYPE_KEY};
use crate::models::{Route, RouteFilter};
use std::fmt::Write;

fn selected(is_selected: bool) -> &'static str {
    if is_selected {
        " selected"
    } else {
        ""
    }
}

/// Route search form pre-filled with `filter`.
///
/// `label` names the persistence medium and shows up in the heading.
pub fn search_form_page(label: &str, filter: &RouteFilter, transport_types: &[String]) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "<h1>Route search ({label})</h1>\n<form method='post'>\n\
         <label for='{ROUTE_NAME_KEY}'>Route name:</label>\n\
         <input type='text' id='{ROUTE_NAME_KEY}' name='{ROUTE_NAME_KEY}' value='{name}'>\n\
         <label for='{TRANSPORT_TYPE_KEY}'>Transport type:</label>\n\
         <select id='{TRANSPORT_TYPE_KEY}' name='{TRANSPORT_TYPE_KEY}'>\n\
         <option value=''>All</option>\n",
        label = escape(label),
        name = escape(&filter.route_name),
    );

    for transport_type in transport_types {
        let _ = writeln!(
            body,
            "<option value='{value}'{sel}>{value}</option>",
            value = escape(transport_type),
            sel = selected(*transport_type == filter.transport_type),
        );
    }

    let express = filter.express_flag();
    let _ = write!(
        body,
        "</select>\n\
         <label for='{IS_EXPRESS_KEY}'>Express:</label>\n\
         <select id='{IS_EXPRESS_KEY}' name='{IS_EXPRESS_KEY}'>\n\
         <option value=''>All</option>\n\
         <option value='true'{yes}>Yes</option>\n\
         <option value='false'{no}>No</option>\n\
         </select>\n\
         <button type='submit'>Search</button>\n</form>",
        yes = selected(express == Some(true)),
        no = selected(express == Some(false)),
    );

    page("Search Routes", FORM_STYLE, &body)
}

/// Result table of (name, transport type, express) triples, or a notice when empty.
pub fn search_results_page(label: &str, routes: &[Route]) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>Route search results ({})</h1>", escape(label));

    if routes.is_empty() {
        body.push_str("<p class='no-results'>No routes found matching the search criteria.</p>");
    } else {
        body.push_str(
            "<table>\n<tr><th>Route name</th><th>Transport type</th><th>Express</th></tr>\n",
        );
        for route in routes {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&route.name),
                escape(&route.transport_type),
                route.is_express
            );
        }
        body.push_str("</table>");
    }
    body.push_str("\n<a href='/'>Home</a>");

    page("Route Search Results", FORM_STYLE, &body)
}
