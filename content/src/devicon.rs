//! Technology name to Devicon icon lookup.

const DEVICON_CDN: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

fn devicon_path(tech: &str) -> Option<&'static str> {
    let path = match tech {
        "HTML" => "html5/html5-original",
        "CSS" => "css3/css3-original",
        "JavaScript" => "javascript/javascript-original",
        "TypeScript" => "typescript/typescript-original",
        "Angular" => "angularjs/angularjs-original",
        "Astro" => "astro/astro-original",
        "React" => "react/react-original",
        "Tailwind CSS" | "TailwindCSS" => "tailwindcss/tailwindcss-original",
        "Java" => "java/java-original",
        "Kotlin" => "kotlin/kotlin-original",
        "C#" => "csharp/csharp-original",
        "C++" => "cplusplus/cplusplus-original",
        "PHP" => "php/php-plain",
        "Python" => "python/python-original",
        "Spring Boot" => "spring/spring-original",
        ".NET" | ".NET 8" => "dotnetcore/dotnetcore-original",
        "FastAPI" => "fastapi/fastapi-original",
        "PostgreSQL" => "postgresql/postgresql-original",
        "MySQL" => "mysql/mysql-original",
        "MariaDB" => "mariadb/mariadb-original",
        "Oracle Database" => "oracle/oracle-original",
        "MongoDB" => "mongodb/mongodb-original",
        "Redis" => "redis/redis-original",
        "Docker" => "docker/docker-original",
        "Kubernetes" => "kubernetes/kubernetes-original",
        "GitHub Actions" => "github/github-original",
        "Git" => "git/git-original",
        "Linux" => "linux/linux-original",
        "AWS" | "AWS S3" => "amazonwebservices/amazonwebservices-plain-wordmark",
        "Azure" => "azure/azure-original",
        "Prisma" => "prisma/prisma-original",
        "Nginx" => "nginx/nginx-original",
        "Node.js" => "nodejs/nodejs-original",
        "Express" => "express/express-original",
        "Socket.io" => "socketio/socketio-original",
        _ => return None,
    };
    Some(path)
}

/// CDN URL of the icon for `tech`, or `None` for technologies without one.
#[must_use]
pub fn devicon_url(tech: &str) -> Option<String> {
    devicon_path(tech).map(|path| format!("{DEVICON_CDN}/{path}.svg"))
}
