//! kvenv - Pull Azure Key Vault secrets into your shell and `.env` files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── connection    # `test`
//! │   ├── secrets       # list, get, get-multiple, set
//! │   ├── prefix        # get-prefix, get-prefix-save
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # Vault URL and TLS settings
//!     ├── store/        # Secret store backends
//!     │   ├── mod       # SecretStore trait
//!     │   ├── azure     # Azure Key Vault (feature `azure`)
//!     │   ├── file      # Local JSON file
//!     │   └── memory    # In-memory
//!     ├── prefix        # Prefix grouping
//!     ├── env           # .env serialization
//!     ├── secrets       # Secret operations
//!     └── validation    # Name and value checks
//! ```
//!
//! # Example
//!
//! ```
//! use kvenv::core::env::EnvFile;
//! use kvenv::core::prefix::get_prefix;
//! use kvenv::core::store::MemoryStore;
//!
//! let store = MemoryStore::from_pairs([
//!     ("AI-api-key", "sk-123"),
//!     ("AI-model", "gpt-4o"),
//!     ("DB-user", "admin"),
//! ]);
//!
//! let secrets = get_prefix(&store, "AI").unwrap();
//! let env = EnvFile::from_collection(&secrets);
//! assert_eq!(env.render(), "AI_API_KEY=sk-123\nAI_MODEL=gpt-4o\n");
//! ```

pub mod cli;
pub mod core;
pub mod error;
