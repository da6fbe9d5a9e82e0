//! Default stylesheet embedded in rendered pages
//!
//! Dark is the default presentation; `body.light-theme` switches palettes.

pub const STYLESHEET: &str = r#"
:root {
    --bg: #121212;
    --fg: #e8e8e8;
    --muted: #9a9a9a;
    --accent: #f5a623;
    --vowel: #ff6b6b;
    --consonant: #4ecdc4;
    --quote-border: #f5a623;
}
body.light-theme {
    --bg: #fafafa;
    --fg: #1d1d1d;
    --muted: #555555;
    --accent: #c77d00;
    --vowel: #c0392b;
    --consonant: #16796f;
    --quote-border: #c77d00;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    padding: 2rem;
    background: var(--bg);
    color: var(--fg);
    font-family: Georgia, "Times New Roman", serif;
    line-height: 1.5;
    transition: background 0.2s, color 0.2s;
}
#theme-toggle {
    position: fixed;
    top: 1rem;
    right: 1rem;
    padding: 0.4rem 0.8rem;
    border: 1px solid var(--muted);
    border-radius: 4px;
    background: transparent;
    color: var(--fg);
    cursor: pointer;
}
#content-container {
    display: flex;
    gap: 2rem;
    align-items: flex-start;
}
.column {
    flex: 1 1 0;
    min-width: 0;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.column img { max-width: 100%; height: auto; }
h1, h2 { margin: 0.2em 0; letter-spacing: 0.05em; }
.vowel { color: var(--vowel); }
.consonant { color: var(--consonant); }
.bionic-part { font-weight: 700; }
.quote {
    border-left: 3px solid var(--quote-border);
    padding-left: 1rem;
    font-style: italic;
}
sup { color: var(--accent); }
.youtube-embed { position: relative; padding-bottom: 56.25%; height: 0; }
.youtube-embed iframe {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
}
.error {
    margin: 0 auto;
    max-width: 36rem;
    padding: 1.5rem;
    border: 1px solid var(--vowel);
    border-radius: 6px;
}
.error button {
    margin-top: 1rem;
    padding: 0.4rem 1rem;
    cursor: pointer;
}
"#;
