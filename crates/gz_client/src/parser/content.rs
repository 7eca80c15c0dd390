use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Tags that survive sanitizing. Attributes are always dropped.
pub const ALLOWED_TAGS: [&str; 4] = ["p", "br", "strong", "em"];

/// Elements removed together with everything inside them.
const DROPPED_TAGS: [&str; 4] = ["script", "style", "iframe", "object"];

/// Strip every tag outside [`ALLOWED_TAGS`] from an HTML snippet and trim the
/// result. Text inside removed tags is kept, except for [`DROPPED_TAGS`].
pub fn sanitize(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(content);
    let mut buf = String::new();
    for child in fragment.root_element().children() {
        render_node(&mut buf, child);
    }
    buf.trim().to_string()
}

fn render_node(buf: &mut String, node: NodeRef<Node>) {
    match node.value() {
        Node::Text(text) => push_escaped(buf, text),
        Node::Element(el) => {
            let name = el.name();
            if DROPPED_TAGS.contains(&name) {
                return;
            }
            if name == "br" {
                buf.push_str("<br>");
                return;
            }

            let keep = ALLOWED_TAGS.contains(&name);
            if keep {
                buf.push('<');
                buf.push_str(name);
                buf.push('>');
            }
            for child in node.children() {
                render_node(buf, child);
            }
            if keep {
                buf.push_str("</");
                buf.push_str(name);
                buf.push('>');
            }
        }
        _ => {}
    }
}

fn push_escaped(buf: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            _ => buf.push(c),
        }
    }
}
