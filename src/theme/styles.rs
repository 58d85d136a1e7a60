//! Global CSS styles for the Contact Card shell.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --page-bg: #fbfbfb;
  --page-fg: #202020;

  --font-sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  min-height: 100vh;
}

a {
  text-decoration: none;
}

/* === Feed Layout === */
.feed {
  min-height: 100vh;
  padding: 1.5rem;
  background: var(--page-bg);
  color: var(--page-fg);
}

.feed-sidebar {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  max-width: 20rem;
}

.profile-name {
  font-size: 1.25rem;
  font-weight: 600;
}

.profile-role,
.profile-bio {
  font-size: 0.875rem;
  opacity: 0.75;
}
"#;
