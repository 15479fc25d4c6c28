//! Embedded stylesheets. Colors come from the host theme's CSS variables.

/// Stylesheet for the card shell and the departure list.
pub const CARD_STYLE: &str = r#"
.departures-container {
  padding: 0;
}
.departure-row {
  display: flex;
  align-items: center;
  padding: 4px 0;
  border-bottom: 1px solid var(--divider-color);
}
.departure-row:first-child {
  padding-top: 0;
}
.departure-row:last-child {
  border-bottom: none;
  padding-bottom: 0;
}
.line-badge {
  min-width: 30px;
  height: 24px;
  background-color: var(--primary-color);
  color: white;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 4px;
  font-weight: bold;
  margin-right: 12px;
  padding: 0 4px;
}
.destination {
  flex: 1;
  color: var(--primary-text-color);
  font-size: 14px;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}
.time-info {
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  margin-left: 12px;
}
.minutes {
  font-size: 18px;
  font-weight: bold;
  color: var(--primary-color);
}
.minutes-label {
  font-size: 12px;
  color: var(--secondary-text-color);
  margin-left: 2px;
}
.delayed {
  color: var(--error-color);
}
.scheduled {
  color: var(--warning-color);
}
.status-indicator {
  font-size: 10px;
  margin-top: 2px;
  font-weight: 500;
}
.no-departures {
  padding: 20px;
  text-align: center;
  color: var(--secondary-text-color);
}
@media (max-width: 400px) {
  .destination {
    font-size: 12px;
  }
  .line-badge {
    min-width: 40px;
    height: 25px;
    font-size: 14px;
  }
}
"#;

/// Stylesheet for the configuration editor form.
pub const EDITOR_STYLE: &str = r#"
.card-config {
  padding: 16px;
}
.config-header {
  margin-bottom: 16px;
}
.config-header h3 {
  margin: 0 0 8px 0;
}
.config-header p {
  margin: 0;
  color: var(--secondary-text-color);
  font-size: 14px;
}
.config-row {
  margin-bottom: 12px;
}
.config-row label {
  display: block;
  margin-bottom: 4px;
  font-size: 14px;
  color: var(--primary-text-color);
}
.config-row input {
  width: 100%;
  padding: 8px;
  border: 1px solid var(--divider-color);
  border-radius: 4px;
  background-color: var(--card-background-color);
  color: var(--primary-text-color);
}
"#;
