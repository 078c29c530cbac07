//! Static page views
//!
//! Each view is a pure function from no input to a fixed `Page`. Both pages
//! are baked into the binary, so rendering cannot fail and two invocations
//! always produce byte-identical output.

/// A fully rendered page, ready to be turned into an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

/// Landing page served at `/`.
pub fn landing() -> Page {
    Page {
        status: 200,
        content_type: "text/html; charset=utf-8",
        body: String::from(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Likha Licensing Platform</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            background: #f9fafb;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            color: #111827;
        }
        .container {
            text-align: center;
            padding: 48px 32px;
            max-width: 720px;
        }
        h1 {
            font-size: 2.5em;
            margin-bottom: 16px;
            font-weight: 700;
        }
        .subtitle {
            font-size: 1.25em;
            color: #4b5563;
            margin-bottom: 32px;
        }
        .panel {
            background: #ffffff;
            padding: 24px;
            border-radius: 8px;
            border: 1px solid #e5e7eb;
            box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
            text-align: left;
        }
        .panel h2 {
            font-size: 1.15em;
            font-weight: 600;
            color: #1f2937;
            margin-bottom: 8px;
        }
        .panel p {
            color: #4b5563;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Likha Licensing Platform</h1>
        <p class="subtitle">Enterprise licensing software platform</p>
        <div class="panel">
            <h2>Development Environment Ready</h2>
            <p>The Likha application server is up and your development environment is now running!</p>
        </div>
    </div>
</body>
</html>"#,
        ),
    }
}

/// Fallback page for every path without a registered route.
pub fn not_found() -> Page {
    Page {
        status: 404,
        content_type: "text/plain; charset=utf-8",
        body: String::from("Page not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_contains_required_copy() {
        let page = landing();
        assert_eq!(page.status, 200);
        assert!(page.body.contains("Likha Licensing Platform"));
        assert!(page.body.contains("Enterprise licensing software platform"));
        assert!(page.body.contains("Development Environment Ready"));
        assert!(page.body.contains("development environment is now running"));
    }

    #[test]
    fn test_not_found_body_is_exact() {
        let page = not_found();
        assert_eq!(page.status, 404);
        assert_eq!(page.body, "Page not found");
        assert!(!page.body.contains("Likha"));
    }

    #[test]
    fn test_views_are_idempotent() {
        assert_eq!(landing(), landing());
        assert_eq!(not_found(), not_found());
    }
}
