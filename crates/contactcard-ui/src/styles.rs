//! Stylesheet for the Contact card.
//!
//! Colors are not hard-coded here; they arrive per render as custom
//! properties on `.contact-links`.

pub const CONTACT_CARD_STYLES: &str = r#"
/* === Contact Card === */
.contact-title {
  padding: 0.25rem;
  margin-bottom: 0.75rem;
}

.contact-links {
  display: flex;
  flex-direction: column;
  padding: 0.25rem;
  border-radius: 1rem;
  background-color: var(--contact-panel);
}

.contact-link {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem;
  border-radius: 1rem;
  color: var(--contact-text);
  text-decoration: none;
  cursor: pointer;
}

.contact-link:hover {
  color: var(--contact-text-strong);
  background-color: var(--contact-hover);
}

.contact-link-email {
  overflow: hidden;
}

.contact-link .icon {
  flex-shrink: 0;
  width: 1.5rem;
  height: 2rem;
}

.contact-link .name {
  font-size: 0.875rem;
  line-height: 1.25rem;
}
"#;
