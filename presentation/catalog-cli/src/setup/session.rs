use tokio::io::{AsyncBufReadExt, BufReader};

use business::application::catalog::search_debouncer::SearchDebouncer;
use business::domain::catalog::state::CatalogAction;
use business::domain::catalog::view::{ViewQuery, categories, derive_page};
use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::delete::DeleteProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;
use business::domain::product::value_objects::ProductId;

use crate::config::app_config::AppConfig;
use crate::console::command::{Command, FieldEdits, HELP};
use crate::console::error_mapper::user_message;
use crate::console::render::{render_categories, render_page, render_product};
use crate::setup::dependency_injection::DependencyContainer;

/// Interactive console over the catalog: one command per stdin line.
pub struct Session {
    container: DependencyContainer,
    query: ViewQuery,
    page_size: usize,
    debouncer: SearchDebouncer,
}

impl Session {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let (debouncer, mut committed) = SearchDebouncer::spawn(config.view.search_debounce);
        let mut session = Session {
            container,
            query: ViewQuery::default(),
            page_size: config.view.page_size,
            debouncer,
        };

        println!("Catalog service at {}", config.catalog_api.base_url);
        println!("Type `help` for the list of commands.");
        session.reload().await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match line.parse::<Command>() {
                        Ok(Command::Quit) => break,
                        Ok(command) => session.execute(command).await,
                        Err(e) => println!("{}", e),
                    }
                }

                Some(search) = committed.recv() => {
                    session.query.set_search(search);
                    session.print_page();
                }
            }
        }

        Ok(())
    }

    async fn execute(&mut self, command: Command) {
        match command {
            Command::List => self.print_page(),
            Command::Search(text) => self.debouncer.push(text),
            Command::Category(category) => {
                self.query.set_category(category);
                self.print_page();
            }
            Command::Categories => {
                let state = self.container.store.snapshot();
                println!("{}", render_categories(&categories(&state.items)));
            }
            Command::Favorites(favorites_only) => {
                self.query.set_favorites_only(favorites_only);
                self.print_page();
            }
            Command::Page(page) => self.go_to_page(page),
            Command::Next => self.go_to_page(self.query.page() + 1),
            Command::Prev => self.go_to_page(self.query.page().saturating_sub(1)),
            Command::Show(id) => match self.container.store.snapshot().find(&id) {
                Some(product) => println!("{}", render_product(product)),
                None => report(&ProductError::NotFound),
            },
            Command::Like(id) => self.toggle_like(id),
            Command::Delete(id) => self.delete(id).await,
            Command::Create(edits) => self.create(edits).await,
            Command::Edit(id, edits) => self.edit(id, edits).await,
            Command::Reload => self.reload().await,
            Command::Help => println!("{}", HELP),
            Command::Quit => {}
        }
    }

    fn print_page(&self) {
        let state = self.container.store.snapshot();
        let page = derive_page(&state.items, &self.query, self.page_size);
        println!("{}", render_page(&state, &page, &self.query));
    }

    fn go_to_page(&mut self, page: usize) {
        let state = self.container.store.snapshot();
        let total_pages = derive_page(&state.items, &self.query, self.page_size).total_pages;
        if page == 0 || page > total_pages {
            println!("No page {} (1-{})", page, total_pages);
            return;
        }
        self.query.set_page(page);
        self.print_page();
    }

    async fn reload(&mut self) {
        // A failed load is recorded in the store and shown by the page render.
        let _ = self.container.load_products.execute().await;
        self.print_page();
    }

    fn toggle_like(&self, id: ProductId) {
        if self.container.store.snapshot().find(&id).is_none() {
            report(&ProductError::NotFound);
            return;
        }
        self.container
            .store
            .dispatch(CatalogAction::ToggleLike(id));
        self.print_page();
    }

    async fn delete(&self, id: ProductId) {
        match self
            .container
            .delete_product
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => self.print_page(),
            Err(e) => report(&e),
        }
    }

    async fn create(&self, edits: FieldEdits) {
        let draft = match edits.into_draft() {
            Ok(draft) => draft,
            Err(e) => return println!("{}", e),
        };
        if let Err(e) = draft.validate() {
            return report(&e);
        }

        match self
            .container
            .create_product
            .execute(CreateProductParams { draft })
            .await
        {
            Ok(product) => println!("Created [{}] {}", product.id, product.title),
            Err(e) => report(&e),
        }
    }

    async fn edit(&self, id: ProductId, edits: FieldEdits) {
        let Some(existing) = self.container.store.snapshot().find(&id).cloned() else {
            return report(&ProductError::NotFound);
        };
        let product = match edits.edit(&existing) {
            Ok(product) => product,
            Err(e) => return println!("{}", e),
        };
        if let Err(e) = product.validate() {
            return report(&e);
        }

        match self
            .container
            .update_product
            .execute(UpdateProductParams { product })
            .await
        {
            Ok(product) => println!("{}", render_product(&product)),
            Err(e) => report(&e),
        }
    }
}

fn report(error: &ProductError) {
    println!("Error: {}", user_message(error));
}
