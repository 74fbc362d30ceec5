//! README synthesis.
//!
//! The README is the one generated file that does not go through the
//! template renderer: its body needs no template-file lookup, only the
//! service name, so it is formatted directly here.

use crate::domain::vars::TemplateVars;

/// Build the README body for a service.
pub fn readme_body(vars: &TemplateVars) -> String {
    format!(
        r#"# {capitalized} Service

A microservice that handles {name} functionality.

## Features

- RESTful API with Fastify
- JWT authentication
- PostgreSQL database
- Swagger documentation
- Containerized with Docker

## Development

### Prerequisites

- Node.js >= 20.0.0
- Bun >= 0.6.0
- PostgreSQL

### Getting Started

1. Install dependencies:
   ```bash
   bun install
   ```

2. Set up environment variables:
   ```bash
   cp .env.example .env
   # Edit .env with your configuration
   ```

3. Run database migrations:
   ```bash
   bun run migrate
   ```

4. Start the development server:
   ```bash
   bun run dev
   ```

5. Access the API documentation at [http://localhost:3000/docs](http://localhost:3000/docs)

## API Routes

- `GET /health/live` - Liveness probe
- `GET /health/ready` - Readiness probe with database check

## Deployment

Build and deploy with Docker:

```bash
docker build -t {name}-service .
docker run -p 3000:3000 {name}-service
```
"#,
        capitalized = vars.capitalized(),
        name = vars.service_name(),
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_uses_capitalized_name() {
        let body = readme_body(&TemplateVars::new("order-service"));
        assert!(body.starts_with("# Order-service Service"));
    }

    #[test]
    fn docker_commands_use_raw_name() {
        let body = readme_body(&TemplateVars::new("order-service"));
        assert!(body.contains("docker build -t order-service-service ."));
        assert!(body.contains("docker run -p 3000:3000 order-service-service"));
    }

    #[test]
    fn mentions_health_routes() {
        let body = readme_body(&TemplateVars::new("widget"));
        assert!(body.contains("/health/live"));
        assert!(body.contains("/health/ready"));
    }
}
