//! # Sample Database Description
//!
//! The schema text and few-shot examples describe the bundled Chinook sample
//! database. They are static: the prompt does not introspect the database.

/// A human-readable description of every table and column in the sample database.
pub const SCHEMA_DESCRIPTION: &str = "
Database Schema:
- customers: CustomerId, FirstName, LastName, Company, Address, City, State, Country, PostalCode, Phone, Fax, Email, SupportRepId
- invoices: InvoiceId, CustomerId, InvoiceDate, BillingAddress, BillingCity, BillingState, BillingCountry, BillingPostalCode, Total
- invoice_items: InvoiceLineId, InvoiceId, TrackId, UnitPrice, Quantity
- tracks: TrackId, Name, AlbumId, MediaTypeId, GenreId, Composer, Milliseconds, Bytes, UnitPrice
- albums: AlbumId, Title, ArtistId
- artists: ArtistId, Name
- genres: GenreId, Name
- media_types: MediaTypeId, Name
- playlists: PlaylistId, Name
- playlist_track: PlaylistId, TrackId
- employees: EmployeeId, LastName, FirstName, Title, ReportsTo, BirthDate, HireDate, Address, City, State, Country, PostalCode, Phone, Fax, Email
";

/// A question paired with the query that answers it.
#[derive(Debug, Clone, Copy)]
pub struct FewShotExample {
    pub question: &'static str,
    pub sql: &'static str,
}

pub const FEW_SHOT_EXAMPLES: &[FewShotExample] = &[
    FewShotExample {
        question: "Which customers are from Brazil?",
        sql: "SELECT FirstName, LastName, Country FROM customers WHERE Country = 'Brazil';",
    },
    FewShotExample {
        question: "What are the names of all tracks in the 'Rock' genre?",
        sql: "SELECT t.Name FROM tracks t\nJOIN genres g ON t.GenreId = g.GenreId\nWHERE g.Name = 'Rock'\nLIMIT 10;",
    },
    FewShotExample {
        question: "What are the top 5 most expensive tracks?",
        sql: "SELECT Name, UnitPrice FROM tracks ORDER BY UnitPrice DESC LIMIT 5;",
    },
    FewShotExample {
        question: "How many customers are there in total?",
        sql: "SELECT COUNT(*) as total_customers FROM customers;",
    },
    FewShotExample {
        question: "What are the names of all albums by the artist 'AC/DC'?",
        sql: "SELECT al.Title FROM albums al\nJOIN artists ar ON al.ArtistId = ar.ArtistId\nWHERE ar.Name = 'AC/DC';",
    },
];

/// Questions suggested to users of the chat frontend.
pub const EXAMPLE_QUESTIONS: &[&str] = &[
    "How many customers are from each country?",
    "What are the top 10 best-selling tracks?",
    "Which artist has the most albums?",
    "What is the total revenue by year?",
    "Show me all customers from Canada",
    "Which customers are from Brazil?",
    "What are the names of all tracks in the 'Rock' genre?",
    "What are the top 5 most expensive tracks?",
];

/// Renders the few-shot examples as question/answer pairs for the system prompt.
pub fn render_examples(examples: &[FewShotExample]) -> String {
    examples
        .iter()
        .map(|e| format!("Question: {}\nSQL: {}", e.question, e.sql))
        .collect::<Vec<_>>()
        .join("\n\n")
}
