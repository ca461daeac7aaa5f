//! Global CSS styles for the Ecosystem Directory.
//!
//! Dark surface, one brand accent, white-alpha borders.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night: #0b0d17;
  --night-raised: #151828;

  /* BRAND (Selection, Accents) */
  --brand: #6c4cf1;
  --brand-glow: rgba(108, 76, 241, 0.35);

  /* STATUS */
  --live: #2fd67b;
  --testnet: #f5a524;

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.6);
  --text-muted: rgba(255, 255, 255, 0.4);

  /* WHITE ALPHA */
  --white-alpha-100: rgba(255, 255, 255, 0.06);
  --white-alpha-300: rgba(255, 255, 255, 0.3);

  /* Typography */
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-flip: 600ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--night);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

a {
  color: inherit;
}

/* === Directory Page === */
.directory {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 0 1rem 4rem;
  transform: translateZ(0);
}

.directory-title {
  margin-top: 3rem;
  max-width: 850px;
  text-align: center;
  font-size: 3rem;
  font-weight: 700;
  line-height: 1.2;
}

.directory-subtitle {
  margin-top: 2rem;
  max-width: 400px;
  text-align: center;
  font-size: 1.5rem;
  color: var(--text-secondary);
}

.directory-community {
  margin-top: 1rem;
  max-width: 400px;
  text-align: center;
  font-size: 1.125rem;
  color: var(--text-secondary);
}

.directory-filters {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: 2rem;
  width: 100%;
  margin-top: 2rem;
}

.filter-group {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.filter-group--category {
  flex: 2;
}

.filter-group--status {
  flex: 1;
  justify-content: flex-end;
}

.filter-title {
  font-size: 1.5rem;
  font-weight: 700;
}

/* === Tag Selector === */
.tag-selector {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem 1rem;
}

.pill {
  margin: 0.25rem 0;
  padding: 0.375rem 0.875rem;
  border: 1px solid var(--white-alpha-300);
  border-radius: 6px;
  background: transparent;
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 1rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.pill:hover {
  background: var(--white-alpha-100);
}

.pill.selected,
.pill.selected:hover {
  background: var(--brand);
  border-color: transparent;
}

/* === Project Grid === */
.project-grid {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  margin-top: 2.5rem;
}

.project-slot {
  width: 300px;
  padding: 1rem;
}

/* === Flip Card === */
.flip-card {
  height: 340px;
  perspective: 1000px;
  cursor: pointer;
}

.flip-card__inner {
  position: relative;
  width: 100%;
  height: 100%;
  transition: transform var(--transition-flip);
  transform-style: preserve-3d;
}

.flip-card.flipped .flip-card__inner {
  transform: rotateY(180deg);
}

.flip-card__face {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  padding: 1.25rem;
  border: 1px solid var(--white-alpha-300);
  border-radius: 12px;
  background: var(--night-raised);
  backface-visibility: hidden;
}

.flip-card__face--back {
  transform: rotateY(180deg);
}

.card-logo {
  width: 72px;
  height: 72px;
  border-radius: 50%;
  object-fit: cover;
}

.card-logo--placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--brand-glow);
  font-size: 2rem;
  font-weight: 700;
}

.card-name {
  margin-top: 1rem;
  font-size: 1.375rem;
  font-weight: 700;
}

.card-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.375rem;
  margin-top: auto;
}

.card-tag {
  padding: 0.125rem 0.5rem;
  border-radius: 4px;
  background: var(--white-alpha-100);
  color: var(--text-secondary);
  font-size: 0.8rem;
}

.card-hint {
  margin-top: 0.75rem;
  color: var(--text-muted);
  font-size: 0.75rem;
}

.card-description {
  color: var(--text-secondary);
  overflow-y: auto;
}

.card-links {
  display: flex;
  gap: 1rem;
  margin-top: auto;
  font-size: 0.875rem;
}

/* === Status Badge === */
.badge {
  align-self: flex-start;
  margin-top: 0.5rem;
  padding: 0.125rem 0.5rem;
  border-radius: 999px;
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
}

.badge--live {
  background: rgba(47, 214, 123, 0.15);
  color: var(--live);
}

.badge--testnet {
  background: rgba(245, 165, 36, 0.15);
  color: var(--testnet);
}

/* === Empty State === */
.empty-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  margin: 2rem 0;
  opacity: 0.8;
}

.empty-state__title {
  font-size: 1.5rem;
}

.empty-state__hint {
  margin-top: 0.5rem;
  font-size: 1.125rem;
}

/* === Accessibility === */
.pill:focus-visible,
.flip-card:focus-visible {
  outline: 2px solid var(--brand);
  outline-offset: 2px;
}

/* === Responsive Layout for Narrow Windows === */
@media (max-width: 720px) {
  .directory-title {
    font-size: 2.25rem;
  }

  .directory-filters {
    flex-direction: column;
    align-items: center;
  }

  .filter-group--status {
    justify-content: center;
  }
}
"#;
