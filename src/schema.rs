//! Schema registry.
//!
//! The registry is an immutable mapping from table name to its ordered
//! column names. It is constructed once, ahead of any query, and every
//! lookup is case-insensitive. The validator is its only consumer.

/// The schema of a single table: its name and ordered column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    name: String,
    columns: Vec<String>,
}

impl TableSchema {
    /// Creates a table schema from a name and its columns.
    pub fn new(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self { name: name.into(), columns: columns.into_iter().map(Into::into).collect() }
    }

    /// Returns the table name with its original spelling.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column names in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if the table has the named column (case-insensitive).
    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c.eq_ignore_ascii_case(column))
    }
}

/// Registry of known tables.
///
/// # Example
///
/// ```
/// use relalg::schema::SchemaRegistry;
///
/// let registry = SchemaRegistry::new()
///     .with_table("Produto", ["idProduto", "Nome", "Preco"]);
///
/// assert!(registry.is_table("produto"));
/// assert!(registry.is_field("Produto", "preco"));
/// assert!(!registry.is_field("Produto", "Cor"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    tables: Vec<TableSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table to the registry.
    #[must_use]
    pub fn with_table(
        mut self,
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.tables.push(TableSchema::new(name, columns));
        self
    }

    /// The demo store schema used by the teaching front end.
    #[must_use]
    pub fn demo_store() -> Self {
        Self::new()
            .with_table("Categoria", ["idCategoria", "Descricao"])
            .with_table(
                "Produto",
                ["idProduto", "Nome", "Descricao", "Preco", "QuantEstoque", "Categoria_idCategoria"],
            )
            .with_table("TipoCliente", ["idTipoCliente", "Descricao"])
            .with_table(
                "Cliente",
                [
                    "idCliente",
                    "Nome",
                    "Email",
                    "Nascimento",
                    "Senha",
                    "TipoCliente_idTipoCliente",
                    "DataRegistro",
                ],
            )
            .with_table("TipoEndereco", ["idTipoEndereco", "Descricao"])
            .with_table(
                "Endereco",
                [
                    "idEndereco",
                    "EnderecoPadrao",
                    "Logradouro",
                    "Numero",
                    "Complemento",
                    "Bairro",
                    "Cidade",
                    "UF",
                    "CEP",
                    "TipoEndereco_idTipoEndereco",
                    "Cliente_idCliente",
                ],
            )
            .with_table("Telefone", ["Numero", "Cliente_idCliente"])
            .with_table("Status", ["idStatus", "Descricao"])
            .with_table(
                "Pedido",
                ["idPedido", "Status_idStatus", "DataPedido", "ValorTotalPedido", "Cliente_idCliente"],
            )
            .with_table(
                "Pedido_has_Produto",
                [
                    "idPedidoProduto",
                    "Pedido_idPedido",
                    "Produto_idProduto",
                    "Quantidade",
                    "PrecoUnitario",
                ],
            )
    }

    /// Returns the registered tables in registration order.
    #[must_use]
    pub fn tables(&self) -> &[TableSchema] {
        &self.tables
    }

    /// Looks up a table by name (case-insensitive).
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Returns true if the table exists.
    #[must_use]
    pub fn is_table(&self, name: &str) -> bool {
        self.table(name).is_some()
    }

    /// Returns true if `field` resolves in `table`.
    ///
    /// `*` is accepted for any known table. An unknown table makes every
    /// field invalid, including `*`.
    #[must_use]
    pub fn is_field(&self, table: &str, field: &str) -> bool {
        match self.table(table) {
            Some(schema) => field == "*" || schema.has_column(field),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = SchemaRegistry::demo_store();
        assert!(registry.is_table("Produto"));
        assert!(registry.is_table("PRODUTO"));
        assert!(registry.is_table("produto"));
        assert!(!registry.is_table("Produtos"));

        assert!(registry.is_field("produto", "PRECO"));
        assert!(!registry.is_field("Produto", "Invalido"));
    }

    #[test]
    fn wildcard_needs_a_known_table() {
        let registry = SchemaRegistry::demo_store();
        assert!(registry.is_field("Cliente", "*"));
        assert!(!registry.is_field("Inexistente", "*"));
    }

    #[test]
    fn stored_spelling_is_preserved() {
        let registry = SchemaRegistry::demo_store();
        let table = registry.table("pedido_HAS_produto").unwrap();
        assert_eq!(table.name(), "Pedido_has_Produto");
        assert_eq!(table.columns().len(), 5);
    }
}
