// Markup for each region of the page. Every render replaces the
// region wholesale, so the forms inside are the interaction handlers.

pub const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Routine Advisor</title>
  <link rel="stylesheet" href="/style.css">
</head>
<body>
  <div class="page-wrapper">
    <header class="site-header">
      <h1 class="site-title">Smart Routine &amp; Product Advisor</h1>
    </header>
    {{#if has_notice}}
    <div class="notice" role="alert">{{notice}}</div>
    {{/if}}
    <div class="search-section">
      <form method="post" action="/filter" id="categoryForm">
        <select name="category" id="categoryFilter">
          <option value="" disabled{{#unless has_filter}} selected{{/unless}}>Choose a Category</option>
          {{#each categories}}
          <option value="{{key}}"{{#if selected}} selected{{/if}}>{{label}}</option>
          {{/each}}
        </select>
        <button type="submit">Filter</button>
      </form>
    </div>
    <div id="productsContainer" class="products-grid">
      {{{products}}}
    </div>
    <section class="selected-products">
      <h2>Selected Products</h2>
      <div id="selectedProductsList">
        {{{selection}}}
      </div>
    </section>
    <section class="chatbox">
      <h2>Let's Build Your Routine</h2>
      <div id="chatWindow" class="chat-window">
        {{{chat}}}
      </div>
      <form method="post" action="/chat" id="chatForm" class="chat-form">
        <input type="text" name="message" id="userInput" placeholder="Ask me about products or routines…" autocomplete="off">
        <button type="submit" id="sendBtn">Send</button>
      </form>
    </section>
  </div>
</body>
</html>
"#;

pub const PRODUCTS: &str = r#"{{#if unset}}
<div class="placeholder-message">
  <p>Select a category to discover products</p>
</div>
{{else}}{{#if empty}}
<div class="placeholder-message">
  <p>No products found in this category</p>
</div>
{{else}}{{#each products}}
<div class="product-card{{#if selected}} selected{{/if}}" data-id="{{id}}">
  <img src="{{image}}" alt="{{name}}" loading="lazy">
  <div class="product-info">
    <h3>{{name}}</h3>
    <p class="product-brand">{{brand}}</p>
    <form method="post" action="/selection/toggle" class="toggle-selection-form">
      <input type="hidden" name="id" value="{{id}}">
      <button type="submit" class="toggle-selection-btn">{{#if selected}}Remove{{else}}Select{{/if}}</button>
    </form>
    <form method="post" action="/details/toggle" class="toggle-description-form">
      <input type="hidden" name="id" value="{{id}}">
      <button type="submit" class="toggle-description-btn">Details</button>
    </form>
    <div class="product-description{{#if expanded}} show{{/if}}" id="desc-{{id}}">
      {{description}}
    </div>
    {{#if selected}}
    <div class="selected-badge">&#10003;</div>
    {{/if}}
  </div>
</div>
{{/each}}{{/if}}{{/if}}
"#;

pub const SELECTION: &str = r#"{{#if empty}}
<p class="empty-message">No products selected yet. Click on products above to add them to your routine.</p>
{{else}}{{#each products}}
<div class="selected-product-tag">
  <span>{{name}}</span>
  <form method="post" action="/selection/remove" class="remove-product-form">
    <input type="hidden" name="id" value="{{id}}">
    <button type="submit" class="remove-product-btn" title="Remove">&times;</button>
  </form>
</div>
{{/each}}
<form method="post" action="/selection/clear" class="clear-selection-form">
  <button type="submit" class="clear-selection-btn">Clear All</button>
</form>
{{/if}}
<form method="post" action="/routine" class="generate-form">
  <button type="submit" id="generateRoutine" class="generate-btn"{{#if empty}} disabled{{/if}}>Generate Routine</button>
</form>
"#;

pub const CHAT: &str = r#"<div class="chat-message assistant-message">
  <div class="message-content">
    <p>Welcome! I'm your L'Oréal beauty advisor.</p>
    <p>Select products from the catalog and click <strong>Generate Routine</strong> to receive a personalized skincare or beauty routine tailored just for you.</p>
    <p>After generating your routine, feel free to ask me any follow-up questions!</p>
  </div>
</div>
{{#each entries}}
<div class="chat-message {{role}}-message">
  <div class="message-content">{{{paragraphs content}}}</div>
</div>
{{/each}}
"#;
